//! Server configuration read from the environment (and `.env` via `dotenv`).

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::error::AppError;

pub const HOST_VAR: &str = "KEYWORDS_HOST";
pub const PORT_VAR: &str = "KEYWORDS_PORT";
pub const LOG_FORMAT_VAR: &str = "KEYWORDS_LOG_FORMAT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// Bunyan-style JSON records
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{} must be 'pretty' or 'json', got '{}'",
                LOG_FORMAT_VAR, other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            log_format: LogFormat::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let host = std::env::var(HOST_VAR).unwrap_or_else(|_| DEFAULT_HOST.to_string());
        let host = host
            .parse::<IpAddr>()
            .map_err(|e| AppError::Config(format!("{} '{}' is invalid: {}", HOST_VAR, host, e)))?;

        let port = match std::env::var(PORT_VAR) {
            Ok(raw) => raw.trim().parse::<u16>().map_err(|e| {
                AppError::Config(format!("{} '{}' is invalid: {}", PORT_VAR, raw, e))
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let log_format = match std::env::var(LOG_FORMAT_VAR) {
            Ok(raw) => raw.parse()?,
            Err(_) => LogFormat::default(),
        };

        Ok(Self {
            host,
            port,
            log_format,
        })
    }

    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
