//! The [`StorageAdapter`] facade composing directory indexing, content
//! mapping, and backup relay behind the [`PathStore`] trait.

use std::sync::Arc;

use tracing::{debug, info};

use cairn_index::IndexStore;
use cairn_store::ObjectStore;
use cairn_types::ContentHash;

use crate::dirs::DirectoryIndexer;
use crate::error::FsResult;
use crate::mapper::ContentMapper;
use crate::relay::{BackupRelay, Operation};
use crate::traits::PathStore;

/// Name of this adapter variant, logged at construction.
const VARIANT: &str = "ipfs";

/// Path-addressed storage adapter over an object store and an index store.
///
/// Each call runs its backend operations sequentially on the caller's
/// thread; the adapter adds no locking, queueing, or retry of its own, and
/// concurrent callers are only as safe as the backends make them. Mutating
/// operations are mirrored to the backup target, if any, after they succeed
/// on the primary.
pub struct StorageAdapter {
    dirs: DirectoryIndexer,
    mapper: ContentMapper,
    relay: BackupRelay,
}

impl StorageAdapter {
    /// Create an adapter with no backup target.
    pub fn new(objects: Arc<dyn ObjectStore>, index: Arc<dyn IndexStore>) -> Self {
        Self::with_backup(objects, index, None)
    }

    /// Create an adapter that mirrors mutations to `backup`.
    ///
    /// `None` is a valid, permanent choice; a target cannot be attached
    /// later.
    pub fn with_backup(
        objects: Arc<dyn ObjectStore>,
        index: Arc<dyn IndexStore>,
        backup: Option<Arc<dyn PathStore>>,
    ) -> Self {
        let relay = BackupRelay::new(backup);
        info!(variant = VARIANT, backup = relay.is_active(), "storage adapter started");
        Self {
            dirs: DirectoryIndexer::new(index.clone()),
            mapper: ContentMapper::new(objects, index),
            relay,
        }
    }
}

impl PathStore for StorageAdapter {
    fn get(&self, path: &str) -> FsResult<Option<ContentHash>> {
        self.mapper.get(path)
    }

    fn put(&self, content: &[u8], path: &str) -> FsResult<ContentHash> {
        let hash = self.mapper.put(content, path)?;
        debug!(path, hash = %hash, "content mapped");
        self.relay.replay(&Operation::Put {
            content: content.to_vec(),
            path: path.to_string(),
        });
        Ok(hash)
    }

    fn mkdir(&self, dir: &str, recursive: bool) -> FsResult<()> {
        self.dirs.register(dir, recursive)?;
        debug!(dir, "directory registered");
        self.relay.replay(&Operation::Mkdir {
            dir: dir.to_string(),
            recursive,
        });
        Ok(())
    }

    fn file_exists(&self, path: &str) -> FsResult<bool> {
        self.mapper.file_exists(path)
    }

    fn append(&self, content: &[u8], path: &str) -> FsResult<()> {
        self.mapper.append(content, path)?;
        // Unreachable today (append never succeeds); kept so a delivered
        // append would mirror like every other mutation.
        self.relay.replay(&Operation::Append {
            content: content.to_vec(),
            path: path.to_string(),
        });
        Ok(())
    }

    fn list_dir(&self, dir: &str) -> FsResult<Vec<String>> {
        self.dirs.list(dir)
    }

    fn path_for_hash(&self, hash: &ContentHash) -> FsResult<Option<String>> {
        self.mapper.path_for_hash(hash)
    }
}

impl std::fmt::Debug for StorageAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageAdapter")
            .field("variant", &VARIANT)
            .field("relay", &self.relay)
            .finish()
    }
}
