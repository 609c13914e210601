//! In-memory index store for tests and embedding.

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::error::IndexResult;
use crate::traits::IndexStore;

/// An in-memory implementation of [`IndexStore`].
///
/// Scalars and sets live in separate `HashMap`s behind `RwLock`s. Data is
/// lost when the store is dropped.
pub struct InMemoryIndexStore {
    scalars: RwLock<HashMap<String, String>>,
    sets: RwLock<HashMap<String, HashSet<String>>>,
}

impl InMemoryIndexStore {
    /// Create a new empty index store.
    pub fn new() -> Self {
        Self {
            scalars: RwLock::new(HashMap::new()),
            sets: RwLock::new(HashMap::new()),
        }
    }

    /// Number of scalar keys currently set.
    pub fn scalar_count(&self) -> usize {
        self.scalars.read().expect("lock poisoned").len()
    }

    /// Number of non-empty sets.
    pub fn set_count(&self) -> usize {
        self.sets.read().expect("lock poisoned").len()
    }

    /// Total membership edges across all sets.
    pub fn edge_count(&self) -> usize {
        self.sets
            .read()
            .expect("lock poisoned")
            .values()
            .map(HashSet::len)
            .sum()
    }

    /// Returns `true` if no scalars and no sets are stored.
    pub fn is_empty(&self) -> bool {
        self.scalar_count() == 0 && self.set_count() == 0
    }
}

impl Default for InMemoryIndexStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IndexStore for InMemoryIndexStore {
    fn get(&self, key: &str) -> IndexResult<Option<String>> {
        let map = self.scalars.read().expect("lock poisoned");
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> IndexResult<()> {
        let mut map = self.scalars.write().expect("lock poisoned");
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn set_add(&self, set_key: &str, member: &str) -> IndexResult<()> {
        let mut map = self.sets.write().expect("lock poisoned");
        map.entry(set_key.to_string())
            .or_default()
            .insert(member.to_string());
        Ok(())
    }

    fn set_members(&self, set_key: &str) -> IndexResult<Vec<String>> {
        let map = self.sets.read().expect("lock poisoned");
        let mut members: Vec<String> = map
            .get(set_key)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default();
        members.sort();
        Ok(members)
    }
}

impl std::fmt::Debug for InMemoryIndexStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryIndexStore")
            .field("scalar_count", &self.scalar_count())
            .field("set_count", &self.set_count())
            .finish()
    }
}
