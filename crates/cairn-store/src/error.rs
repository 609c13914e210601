//! Error types for object store operations.

use thiserror::Error;

/// Errors from object store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached.
    #[error("object store unavailable: {0}")]
    Unavailable(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
