//! Bounded least-recently-used caches.

use crate::evaluation::EvalSnapshot;
use lru::LruCache;
use std::hash::Hash;
use std::num::NonZeroUsize;

/// Default number of positions kept by the evaluation cache.
pub const EVAL_CACHE_SIZE: usize = 256;

/// LRU map where both reads and writes refresh recency.
#[derive(Debug)]
pub struct BoundedCache<K: Hash + Eq, V> {
    cache: LruCache<K, V>,
}

impl<K: Hash + Eq, V: Clone> BoundedCache<K, V> {
    /// Creates a cache holding at most `capacity` entries (at least one).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Returns a copy of the value and marks it most recently used.
    pub fn get(&mut self, key: &K) -> Option<V> {
        self.cache.get(key).cloned()
    }

    /// Inserts or replaces a value, evicting the least recently used entry
    /// when full.
    pub fn insert(&mut self, key: K, value: V) {
        self.cache.put(key, value);
    }

    pub fn contains(&self, key: &K) -> bool {
        self.cache.contains(key)
    }

    pub fn clear(&mut self) {
        self.cache.clear();
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.cache.cap().get()
    }
}

/// Latest snapshot per exact FEN.
pub type EvalCache = BoundedCache<String, EvalSnapshot>;
