use std::io;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// The keyword scoring oracle could not process the text or language.
    #[error("Keyword extraction failed: {0}")]
    Extraction(String),

    /// Represents configuration-related errors (e.g., invalid environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents standard input/output errors, such as a failed socket bind.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status reported to the caller when this error escapes a handler.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Extraction(_)
            | AppError::Config(_)
            | AppError::Io(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<tokio::task::JoinError> for AppError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_panic() {
            AppError::Extraction(format!("extractor panicked: {}", err))
        } else {
            AppError::Internal(format!("Blocking task failed: {}", err))
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
