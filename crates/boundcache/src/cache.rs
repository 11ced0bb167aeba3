//! BoundCache: the LRU core with hit/miss accounting on top.

use std::hash::Hash;

use crate::lru::LruCache;
use crate::stats::CacheStats;

/// Bounded recency cache with operation counters.
///
/// Single-owner and single-threaded: every operation takes `&mut self`
/// and completes synchronously. Callers that need shared access wrap the
/// whole cache in one exclusive lock; no internal synchronization is
/// provided.
pub struct BoundCache<K, V> {
    lru: LruCache<K, V>,
    stats: CacheStats,
}

impl<K, V> BoundCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create an empty cache that holds at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            lru: LruCache::new(capacity),
            stats: CacheStats::new(),
        }
    }

    /// Look up a key, marking it most recently used on a hit.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        match self.lru.get(key) {
            Some(value) => {
                self.stats.record_hit();
                Some(value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Look up a key without disturbing recency order or the counters.
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.lru.peek(key)
    }

    /// Insert or overwrite a key, returning the entry evicted to make room.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if self.lru.contains_key(&key) {
            self.stats.record_update();
        } else {
            self.stats.record_insertion();
        }

        let evicted = self.lru.put(key, value);
        if evicted.is_some() {
            self.stats.record_eviction();
        }
        evicted
    }

    /// Remove a key, returning its value if it was resident.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.lru.remove(key)
    }

    /// Number of resident entries.
    pub fn len(&self) -> usize {
        self.lru.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lru.is_empty()
    }

    /// The capacity fixed at construction.
    pub fn capacity(&self) -> usize {
        self.lru.capacity()
    }

    /// The running operation counters.
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Drop every entry and zero the counters.
    pub fn clear(&mut self) {
        self.lru.clear();
        self.stats.reset();
    }
}
