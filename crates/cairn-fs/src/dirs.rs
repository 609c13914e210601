//! Directory emulation over flat set membership.
//!
//! The index store has no hierarchy, so directories are emulated with one
//! unordered set per directory prefix. Registering `/a/b/c/` links **every**
//! ancestor prefix to **every** descendant prefix (a transitive closure, not
//! just parent→child edges), so a listing rooted at any level is a single
//! set read. The price is O(depth²) membership writes per `mkdir`.

use std::sync::Arc;

use cairn_index::IndexStore;
use cairn_types::path;

use crate::error::{FsError, FsResult};

/// Set key for the root directory.
const ROOT: &str = "/";

/// Registers directories in the index store's set structure.
pub struct DirectoryIndexer {
    index: Arc<dyn IndexStore>,
}

impl DirectoryIndexer {
    /// Create an indexer over the given index store.
    pub fn new(index: Arc<dyn IndexStore>) -> Self {
        Self { index }
    }

    /// Register `dir` and all its ancestors.
    ///
    /// The path is normalized, trimmed of leading/trailing separators, and
    /// split into segments; each cumulative prefix is then added to the set
    /// of every shallower prefix (and of the root). Registering `""` or
    /// `"/"` writes nothing.
    ///
    /// `recursive = false` is unsupported and fails before any write. The
    /// edge writes themselves are sequential with no two-phase commit: a
    /// backend failure mid-loop leaves a partial closure behind.
    pub fn register(&self, dir: &str, recursive: bool) -> FsResult<()> {
        if !recursive {
            return Err(FsError::UnsupportedMode(
                "non-recursive directory creation is not supported",
            ));
        }

        let normalized = path::normalize(dir);
        let trimmed = path::trim_separators(&normalized);
        let prefixes = cumulative_prefixes(trimmed);

        for i in 1..prefixes.len() {
            for j in 0..i {
                self.index.set_add(&prefixes[j], &prefixes[i])?;
            }
        }
        Ok(())
    }

    /// All registered descendants of `dir`, at every depth, sorted.
    ///
    /// One set read against the closure; the transitive edges written by
    /// [`register`](Self::register) are what make this complete without
    /// recursion.
    pub fn list(&self, dir: &str) -> FsResult<Vec<String>> {
        let normalized = path::normalize(dir);
        let trimmed = path::trim_separators(&normalized);
        let key = if trimmed.is_empty() {
            ROOT.to_string()
        } else {
            format!("{trimmed}/")
        };
        Ok(self.index.set_members(&key)?)
    }
}

impl std::fmt::Debug for DirectoryIndexer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectoryIndexer").finish_non_exhaustive()
    }
}

/// Cumulative, slash-terminated prefixes of a trimmed path, preceded by the
/// root key.
///
/// `"a/b/c"` yields `["/", "a/", "a/b/", "a/b/c/"]`; an empty path yields
/// just `["/"]`.
fn cumulative_prefixes(trimmed: &str) -> Vec<String> {
    let segments = path::segments(trimmed);
    let mut prefixes = Vec::with_capacity(segments.len() + 1);
    prefixes.push(ROOT.to_string());
    let mut acc = String::new();
    for segment in segments {
        acc.push_str(segment);
        acc.push('/');
        prefixes.push(acc.clone());
    }
    prefixes
}
