//! Primary key-value storage tier.

use thiserror::Error;

/// Result type for key-value store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors a storage backend may raise.
///
/// Real backends fail for many environment reasons (quota exceeded,
/// storage disabled, privacy mode); the consent adapter treats every
/// failure the same way — fall through to the cookie tier.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend is unavailable or rejected the operation.
    #[error("key-value store unavailable: {0}")]
    Unavailable(String),

    /// The backend refused the write (quota, policy).
    #[error("key-value store write rejected: {0}")]
    WriteRejected(String),
}

/// A string key-value store scoped to the host page's origin.
pub trait KeyValueStore {
    /// Reads a value. `Ok(None)` means the key is absent.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes a value, replacing any existing one.
    fn set(&mut self, key: &str, value: &str) -> StoreResult<()>;

    /// Removes a key. Absent keys are not an error.
    fn remove(&mut self, key: &str) -> StoreResult<()>;
}
