//! Cache hit/miss accounting.

use std::sync::atomic::{AtomicU64, Ordering};

/// Running operation counters for a cache.
///
/// Counters are relaxed atomics so a read-only `stats()` borrow can update
/// nothing and a shared reference is enough to record events.
#[derive(Debug, Default)]
pub struct CacheStats {
    hits: AtomicU64,
    misses: AtomicU64,
    insertions: AtomicU64,
    updates: AtomicU64,
    evictions: AtomicU64,
}

/// Point-in-time copy of the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    /// Lookups that found a resident key.
    pub hits: u64,
    /// Lookups that found nothing.
    pub misses: u64,
    /// Inserts of a key that was not resident.
    pub insertions: u64,
    /// Overwrites of a resident key.
    pub updates: u64,
    /// Entries pushed out by capacity pressure.
    pub evictions: u64,
}

impl CacheStats {
    /// Create a zeroed counter set.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_insertion(&self) {
        self.insertions.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_update(&self) {
        self.updates.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn record_eviction(&self) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
    }

    /// Lookups that found a resident key.
    pub fn hits(&self) -> u64 {
        self.hits.load(Ordering::Relaxed)
    }

    /// Lookups that found nothing.
    pub fn misses(&self) -> u64 {
        self.misses.load(Ordering::Relaxed)
    }

    /// Inserts of a key that was not resident.
    pub fn insertions(&self) -> u64 {
        self.insertions.load(Ordering::Relaxed)
    }

    /// Overwrites of a resident key.
    pub fn updates(&self) -> u64 {
        self.updates.load(Ordering::Relaxed)
    }

    /// Entries pushed out by capacity pressure.
    pub fn evictions(&self) -> u64 {
        self.evictions.load(Ordering::Relaxed)
    }

    /// Fraction of lookups that hit, in `0.0..=1.0`. Zero lookups is 0.0.
    pub fn hit_ratio(&self) -> f64 {
        let hits = self.hits();
        let total = hits + self.misses();
        if total == 0 {
            0.0
        } else {
            hits as f64 / total as f64
        }
    }

    /// Copy the counters out as plain integers.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits(),
            misses: self.misses(),
            insertions: self.insertions(),
            updates: self.updates(),
            evictions: self.evictions(),
        }
    }

    /// Zero every counter.
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.insertions.store(0, Ordering::Relaxed);
        self.updates.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hit_ratio_counts_lookups_only() {
        let stats = CacheStats::new();

        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        stats.record_insertion();
        stats.record_eviction();

        assert_eq!(stats.hits(), 2);
        assert_eq!(stats.misses(), 1);
        assert_eq!(stats.hit_ratio(), 2.0 / 3.0);
    }

    #[test]
    fn hit_ratio_without_lookups_is_zero() {
        let stats = CacheStats::new();
        assert_eq!(stats.hit_ratio(), 0.0);
    }

    #[test]
    fn snapshot_and_reset() {
        let stats = CacheStats::new();

        stats.record_hit();
        stats.record_miss();
        stats.record_insertion();
        stats.record_update();

        let snap = stats.snapshot();
        assert_eq!(snap.hits, 1);
        assert_eq!(snap.misses, 1);
        assert_eq!(snap.insertions, 1);
        assert_eq!(snap.updates, 1);
        assert_eq!(snap.evictions, 0);

        stats.reset();
        assert_eq!(stats.snapshot(), StatsSnapshot {
            hits: 0,
            misses: 0,
            insertions: 0,
            updates: 0,
            evictions: 0,
        });
    }
}
