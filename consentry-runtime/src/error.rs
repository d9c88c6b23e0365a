//! Runtime error types.

use thiserror::Error;

/// Result type for runtime installation.
pub type RuntimeResult<T> = Result<T, RuntimeError>;

/// Errors surfaced to the embedding host.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuntimeError {
    /// A runtime was already installed in this process.
    #[error("consent runtime already installed")]
    AlreadyInstalled,
}
