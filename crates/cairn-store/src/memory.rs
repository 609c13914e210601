//! In-memory object store for tests and embedding.

use std::collections::HashMap;
use std::sync::RwLock;

use cairn_types::ContentHash;

use crate::error::StoreResult;
use crate::traits::ObjectStore;

/// In-memory, `HashMap`-based object store.
///
/// Content is keyed by the hex-encoded BLAKE3 hash of its bytes. All data is
/// held behind a `RwLock` for safe concurrent access and is lost when the
/// store is dropped.
pub struct InMemoryObjectStore {
    objects: RwLock<HashMap<ContentHash, Vec<u8>>>,
}

impl InMemoryObjectStore {
    /// Create a new empty in-memory store.
    pub fn new() -> Self {
        Self {
            objects: RwLock::new(HashMap::new()),
        }
    }

    /// Number of objects currently stored.
    pub fn len(&self) -> usize {
        self.objects.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.read().expect("lock poisoned").is_empty()
    }

    /// Total bytes across all stored objects.
    pub fn total_bytes(&self) -> u64 {
        self.objects
            .read()
            .expect("lock poisoned")
            .values()
            .map(|content| content.len() as u64)
            .sum()
    }

    /// Return a sorted list of all hashes in the store.
    pub fn all_hashes(&self) -> Vec<ContentHash> {
        let map = self.objects.read().expect("lock poisoned");
        let mut hashes: Vec<ContentHash> = map.keys().cloned().collect();
        hashes.sort();
        hashes
    }

    fn hash_of(content: &[u8]) -> ContentHash {
        ContentHash::new(hex::encode(blake3::hash(content).as_bytes()))
    }
}

impl Default for InMemoryObjectStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStore for InMemoryObjectStore {
    fn add(&self, content: &[u8]) -> StoreResult<ContentHash> {
        let hash = Self::hash_of(content);
        let mut map = self.objects.write().expect("lock poisoned");
        // Idempotent: the same bytes always map to the same hash.
        map.entry(hash.clone()).or_insert_with(|| content.to_vec());
        Ok(hash)
    }

    fn get(&self, hash: &ContentHash) -> StoreResult<Option<Vec<u8>>> {
        let map = self.objects.read().expect("lock poisoned");
        Ok(map.get(hash).cloned())
    }

    fn remove(&self, hash: &ContentHash) -> StoreResult<bool> {
        let mut map = self.objects.write().expect("lock poisoned");
        Ok(map.remove(hash).is_some())
    }
}

impl std::fmt::Debug for InMemoryObjectStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryObjectStore")
            .field("object_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Core add/get
    // -----------------------------------------------------------------------

    #[test]
    fn add_and_get() {
        let store = InMemoryObjectStore::new();
        let hash = store.add(b"hello world").unwrap();

        let read_back = store.get(&hash).unwrap().expect("should exist");
        assert_eq!(read_back, b"hello world");
    }

    #[test]
    fn get_missing_returns_none() {
        let store = InMemoryObjectStore::new();
        assert!(store.get(&ContentHash::new("missing")).unwrap().is_none());
    }

    // -----------------------------------------------------------------------
    // Content-addressing correctness
    // -----------------------------------------------------------------------

    #[test]
    fn same_content_produces_same_hash() {
        let store = InMemoryObjectStore::new();
        let h1 = store.add(b"identical content").unwrap();
        let h2 = store.add(b"identical content").unwrap();
        assert_eq!(h1, h2);
        // Only one object stored (dedup)
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn different_content_produces_different_hashes() {
        let store = InMemoryObjectStore::new();
        let h1 = store.add(b"aaa").unwrap();
        let h2 = store.add(b"bbb").unwrap();
        assert_ne!(h1, h2);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn hash_is_hex_encoded() {
        let store = InMemoryObjectStore::new();
        let hash = store.add(b"x").unwrap();
        assert_eq!(hash.as_str().len(), 64);
        assert!(hash.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    // -----------------------------------------------------------------------
    // Remove
    // -----------------------------------------------------------------------

    #[test]
    fn remove_present_object() {
        let store = InMemoryObjectStore::new();
        let hash = store.add(b"to-delete").unwrap();
        assert!(store.remove(&hash).unwrap()); // was present
        assert!(store.get(&hash).unwrap().is_none()); // now gone
        assert!(!store.remove(&hash).unwrap()); // second remove = false
    }

    #[test]
    fn remove_missing_object() {
        let store = InMemoryObjectStore::new();
        assert!(!store.remove(&ContentHash::new("never-written")).unwrap());
    }

    // -----------------------------------------------------------------------
    // Utility methods
    // -----------------------------------------------------------------------

    #[test]
    fn len_and_is_empty() {
        let store = InMemoryObjectStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);

        store.add(b"a").unwrap();
        assert!(!store.is_empty());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn total_bytes() {
        let store = InMemoryObjectStore::new();
        store.add(b"12345").unwrap(); // 5 bytes
        store.add(b"123456789").unwrap(); // 9 bytes
        assert_eq!(store.total_bytes(), 14);
    }

    #[test]
    fn all_hashes_is_sorted() {
        let store = InMemoryObjectStore::new();
        let h1 = store.add(b"aaa").unwrap();
        let h2 = store.add(b"bbb").unwrap();
        let h3 = store.add(b"ccc").unwrap();

        let hashes = store.all_hashes();
        assert_eq!(hashes.len(), 3);
        for w in hashes.windows(2) {
            assert!(w[0] <= w[1]);
        }
        assert!(hashes.contains(&h1));
        assert!(hashes.contains(&h2));
        assert!(hashes.contains(&h3));
    }

    // -----------------------------------------------------------------------
    // Concurrent read safety
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryObjectStore::new());
        let hash = store.add(b"shared data").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                let expected = hash.clone();
                thread::spawn(move || {
                    let content = store.get(&expected).unwrap();
                    assert_eq!(content.as_deref(), Some(&b"shared data"[..]));
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    // -----------------------------------------------------------------------
    // Default / Debug
    // -----------------------------------------------------------------------

    #[test]
    fn default_creates_empty_store() {
        let store = InMemoryObjectStore::default();
        assert!(store.is_empty());
    }

    #[test]
    fn debug_format() {
        let store = InMemoryObjectStore::new();
        store.add(b"x").unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryObjectStore"));
        assert!(debug.contains("object_count"));
    }
}
