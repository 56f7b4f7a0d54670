// Keyword API entry point

use anyhow::Context;
use keyword_core::brain::KeywordAnalyzer;
use keyword_core::config::ServerConfig;
use keyword_core::server::{self, AppState};
use keyword_core::telemetry;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the environment may already be set.
    dotenv::dotenv().ok();

    let config = ServerConfig::from_env().context("Failed to load configuration")?;
    telemetry::init_tracing(config.log_format).context("Failed to initialize logging")?;

    // Stopword lists load once here and are shared read-only by every request.
    info!("Loading YAKE stopword lists...");
    let state = AppState::new(KeywordAnalyzer::new());

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    server::serve(listener, state)
        .await
        .context("Server terminated with an error")?;

    Ok(())
}
