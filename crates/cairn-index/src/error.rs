//! Error types for index store operations.

use thiserror::Error;

/// Errors from index store operations.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The backend could not be reached.
    #[error("index store unavailable: {0}")]
    Unavailable(String),

    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for index operations.
pub type IndexResult<T> = Result<T, IndexError>;
