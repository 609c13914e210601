//! Content writes and the bidirectional path↔hash mappings.
//!
//! Every successful `put` leaves three records behind: the content itself in
//! the object store, a forward mapping `path → hash`, and a reverse mapping
//! `/ipfs/hash → path`. The writes are sequential with no transaction across
//! the two backends; the failure windows are documented on [`ContentMapper::put`].

use std::sync::Arc;

use cairn_index::IndexStore;
use cairn_store::ObjectStore;
use cairn_types::{path, ContentHash};

use crate::error::{FsError, FsResult};

/// Key prefix for reverse mappings: `"/ipfs/" + hash → path`.
pub const REVERSE_KEY_PREFIX: &str = "/ipfs/";

/// Maintains the path↔hash mappings around object store writes.
pub struct ContentMapper {
    objects: Arc<dyn ObjectStore>,
    index: Arc<dyn IndexStore>,
}

impl ContentMapper {
    /// Create a mapper over the given backends.
    pub fn new(objects: Arc<dyn ObjectStore>, index: Arc<dyn IndexStore>) -> Self {
        Self { objects, index }
    }

    /// Write `content` and record both mappings for `path`.
    ///
    /// Sequence: object store `add`, then the forward mapping, then the
    /// reverse mapping. A failure after the first write leaves orphaned,
    /// unindexed content; a failure between the index writes leaves the
    /// forward mapping without its reverse counterpart. Neither window is
    /// repaired here.
    ///
    /// Re-putting the same path overwrites the forward mapping.
    pub fn put(&self, content: &[u8], file_path: &str) -> FsResult<ContentHash> {
        let key = path::normalize(file_path);
        let hash = self.objects.add(content)?;
        self.index.set(&key, hash.as_str())?;
        self.index
            .set(&format!("{REVERSE_KEY_PREFIX}{hash}"), &key)?;
        Ok(hash)
    }

    /// The content hash recorded for `path`, or `None` if never put.
    ///
    /// Returns the forward-mapping value: the hash, not the content.
    pub fn get(&self, file_path: &str) -> FsResult<Option<ContentHash>> {
        let key = path::normalize(file_path);
        Ok(self.index.get(&key)?.map(ContentHash::new))
    }

    /// Whether a forward mapping exists for `path`.
    pub fn file_exists(&self, file_path: &str) -> FsResult<bool> {
        Ok(self.get(file_path)?.is_some())
    }

    /// The path recorded for `hash` by the reverse mapping.
    pub fn path_for_hash(&self, hash: &ContentHash) -> FsResult<Option<String>> {
        Ok(self.index.get(&format!("{REVERSE_KEY_PREFIX}{hash}"))?)
    }

    /// Append `content` to the file at `path`. Not implemented.
    ///
    /// The intended sequence (fetch the current content by its recorded
    /// hash, concatenate, `add` the result, rewrite both mappings, then
    /// `remove` the superseded content) is deliberately unbuilt; the
    /// operation fails before touching either backend.
    pub fn append(&self, _content: &[u8], _file_path: &str) -> FsResult<()> {
        Err(FsError::NotImplemented("append"))
    }
}

impl std::fmt::Debug for ContentMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentMapper").finish_non_exhaustive()
    }
}
