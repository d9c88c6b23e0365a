//! Telemetry error types.

use thiserror::Error;

/// Result type for transport operations.
pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// Errors that can occur while talking to the backend.
///
/// These never cross the client boundary: [`ApiClient`] logs and
/// swallows every one of them.
///
/// [`ApiClient`]: crate::ApiClient
#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
