//! The [`IndexStore`] trait defining the key-value index surface.
//!
//! Any backend (in-memory, Redis client) implements this trait to hold the
//! path↔hash mappings and directory membership edges for the path adapter.

use crate::error::IndexResult;

/// Key-value store with unordered-set membership.
///
/// Scalar keys and set keys share one keyspace; the adapter keeps them
/// disjoint by convention (scalar keys are normalized file paths and
/// `/ipfs/`-prefixed hashes, set keys are slash-terminated directory
/// prefixes).
pub trait IndexStore: Send + Sync {
    /// Read the scalar value at `key`.
    ///
    /// Returns `Ok(None)` if the key is unset.
    fn get(&self, key: &str) -> IndexResult<Option<String>>;

    /// Write the scalar value at `key`, overwriting any previous value.
    fn set(&self, key: &str, value: &str) -> IndexResult<()>;

    /// Add `member` to the unordered set at `set_key`.
    ///
    /// Creates the set if it does not exist; adding a member that is already
    /// present is a no-op.
    fn set_add(&self, set_key: &str, member: &str) -> IndexResult<()>;

    /// All members of the set at `set_key`, sorted.
    ///
    /// Returns an empty list if the set does not exist.
    fn set_members(&self, set_key: &str) -> IndexResult<Vec<String>>;
}
