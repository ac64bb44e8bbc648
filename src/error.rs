//! Error types for a3s-eventlog

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur in the event log system
///
/// Per-record validation failures are not part of this enum: they are
/// reported as data through [`crate::InsertResult`] (see
/// [`crate::schema::ValidationError`]).
#[derive(Debug, Error)]
pub enum EventLogError {
    /// Batch submitted to the insert pipeline exceeds the allowed size
    #[error("Batch of {size} records exceeds the maximum of {max}")]
    BatchTooLarge { size: usize, max: usize },

    /// Caller input rejected before reaching the core (query bounds, body shape)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No archive entry for the requested id
    #[error("Unable to find event log with {0}")]
    NotFound(String),

    /// Archive could not be read, parsed, or written
    #[error("Archive unavailable: {0}")]
    StoreUnavailable(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP server failure (bind, serve)
    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Result type alias for event log operations
pub type Result<T> = std::result::Result<T, EventLogError>;

impl EventLogError {
    /// HTTP status the transport layer answers with for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            EventLogError::BatchTooLarge { .. } | EventLogError::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            EventLogError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for EventLogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            // Input errors list every problem found
            EventLogError::BatchTooLarge { .. } | EventLogError::InvalidRequest(_) => {
                serde_json::json!({ "detail": [self.detail()] })
            }
            _ => serde_json::json!({ "detail": self.detail() }),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, Json(body)).into_response()
    }
}

impl EventLogError {
    fn detail(&self) -> String {
        match self {
            EventLogError::InvalidRequest(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}
