//! The [`ObjectStore`] trait defining the content-addressed storage surface.
//!
//! Any backend (in-memory, IPFS HTTP client, filesystem) implements this
//! trait to provide bytes-by-hash storage for the path adapter.

use cairn_types::ContentHash;

use crate::error::StoreResult;

/// Content-addressed object store.
///
/// All implementations must satisfy these invariants:
/// - The same bytes always produce the same hash; `add` is idempotent and
///   deduplicating.
/// - Content is immutable once written.
/// - The store never interprets content.
/// - All backend errors are propagated, never silently ignored.
pub trait ObjectStore: Send + Sync {
    /// Write `content` and return its content-addressed hash.
    fn add(&self, content: &[u8]) -> StoreResult<ContentHash>;

    /// Read content by hash.
    ///
    /// Returns `Ok(None)` if no content with this hash exists. The path
    /// adapter never calls this; it exists for callers that resolve the
    /// hashes the adapter's mappings hand back.
    fn get(&self, hash: &ContentHash) -> StoreResult<Option<Vec<u8>>>;

    /// Remove content by hash. Returns `true` if the content existed.
    ///
    /// Unused by the current adapter operations; needed only if `append`
    /// ever evicts superseded content.
    fn remove(&self, hash: &ContentHash) -> StoreResult<bool>;
}
