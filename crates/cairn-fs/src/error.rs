//! Error types for path adapter operations.

use thiserror::Error;

use cairn_index::IndexError;
use cairn_store::StoreError;

/// Errors that can occur during path adapter operations.
///
/// Backend failures are propagated unmodified: the adapter performs no
/// retries, no translation, and no partial-success signaling. A multi-write
/// operation (`mkdir`, `put`) that fails mid-sequence leaves the index in an
/// indeterminate partial state.
#[derive(Debug, Error)]
pub enum FsError {
    /// The path is outside the allowed scope.
    ///
    /// Declared for callers of the surrounding interface; the core
    /// operations never raise it themselves.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// The operation is declared but not implemented.
    #[error("operation not implemented: {0}")]
    NotImplemented(&'static str),

    /// The operation was requested in a mode it does not support.
    #[error("unsupported mode: {0}")]
    UnsupportedMode(&'static str),

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Object store failure, propagated unmodified.
    #[error("object store error: {0}")]
    Store(#[from] StoreError),

    /// Index store failure, propagated unmodified.
    #[error("index store error: {0}")]
    Index(#[from] IndexError),
}

/// Result alias for path adapter operations.
pub type FsResult<T> = Result<T, FsError>;
