//! The [`PathStore`] trait defining the path-addressed storage surface.

use cairn_types::ContentHash;

use crate::error::FsResult;

/// Path-addressed storage over a content-addressed backend.
///
/// Implementations present hierarchical paths as files and directories even
/// though the backends hold only flat keys. The primary implementation is
/// [`StorageAdapter`](crate::StorageAdapter); a backup target configured on
/// an adapter is any other `PathStore`.
///
/// # Read asymmetry
///
/// `put` stores file *content*; `get` returns only the recorded content
/// *hash*. A caller that wants the bytes must resolve the hash against the
/// object store separately. This asymmetry is part of the contract; see
/// [`PathStore::get`].
pub trait PathStore: Send + Sync {
    /// The content hash recorded for `path` by a prior [`put`](Self::put).
    ///
    /// Returns `Ok(None)` if no mapping exists. This is a read of the
    /// forward mapping only: it does **not** return file content and does
    /// not consult the object store.
    fn get(&self, path: &str) -> FsResult<Option<ContentHash>>;

    /// Write `content` to the object store and record the path↔hash
    /// mappings for `path`.
    ///
    /// The content write and the two mapping writes are sequential and not
    /// transactional; a mid-sequence failure leaves orphaned content or a
    /// forward mapping without its reverse counterpart.
    fn put(&self, content: &[u8], path: &str) -> FsResult<ContentHash>;

    /// Register `dir` and every ancestor in the directory index.
    ///
    /// Only `recursive = true` is supported; `recursive = false` fails with
    /// [`FsError::UnsupportedMode`](crate::FsError::UnsupportedMode) before
    /// any index write.
    fn mkdir(&self, dir: &str, recursive: bool) -> FsResult<()>;

    /// Whether a forward mapping exists for `path`.
    ///
    /// A mapping check only, never a check against the object store.
    fn file_exists(&self, path: &str) -> FsResult<bool>;

    /// Append `content` to the file at `path`.
    ///
    /// Not implemented: always fails with
    /// [`FsError::NotImplemented`](crate::FsError::NotImplemented) and
    /// mutates nothing.
    fn append(&self, content: &[u8], path: &str) -> FsResult<()>;

    /// All registered descendants of `dir`, at every depth, sorted.
    ///
    /// A single set read of the directory closure; returns an empty list
    /// for a directory never registered.
    fn list_dir(&self, dir: &str) -> FsResult<Vec<String>>;

    /// The path that produced `hash`, per the reverse mapping.
    ///
    /// Returns `Ok(None)` for a hash no `put` on this adapter recorded.
    fn path_for_hash(&self, hash: &ContentHash) -> FsResult<Option<String>>;
}
