//! HTTP surface: `GET /health` and `POST /keywords`.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use tokio::net::TcpListener;
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::brain::KeywordAnalyzer;
use crate::error::AppError;
use crate::models::{HealthResponse, KeywordRequest, KeywordResponse};

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    analyzer: Arc<KeywordAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: KeywordAnalyzer) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/keywords", post(keywords))
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

async fn keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordRequest>,
) -> Result<Json<KeywordResponse>, AppError> {
    let span = info_span!(
        "keywords",
        request_id = %Uuid::new_v4(),
        max_keywords = request.max_keywords,
    );

    // YAKE is CPU-bound; keep it off the async workers.
    let analyzer = Arc::clone(&state.analyzer);
    let worker_span = span.clone();
    let response = tokio::task::spawn_blocking(move || {
        let _guard = worker_span.enter();
        analyzer.analyze(&request)
    })
    .instrument(span)
    .await??;

    Ok(Json(response))
}

/// Serve until Ctrl-C or SIGTERM.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), AppError> {
    let addr = listener.local_addr()?;
    info!(%addr, "keyword API listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("keyword API stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
