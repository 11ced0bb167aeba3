//! # boundcache
//!
//! Bounded in-memory LRU cache with O(1) operations.
//!
//! ## Architecture
//! - **Lookup index**: AHash map from key to arena slot (O(1) membership)
//! - **Recency list**: doubly-linked list threaded through an arena by
//!   slot index, most recently used at the front
//! - **Eviction**: inserting past capacity drops the back of the list
//!
//! The two structures always hold exactly the same key set; every
//! mutation goes through the index to find the slot and then relinks the
//! list, so no partial state is ever observable.
//!
//! [`LruCache`] is the raw structure; [`BoundCache`] layers hit/miss
//! counters on top of it.
//!
//! The cache is single-owner and single-threaded; shared use means one
//! external lock around the whole cache.
//!
//! ```
//! use boundcache::BoundCache;
//!
//! let mut cache = BoundCache::new(2);
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3); // evicts "a"
//!
//! assert_eq!(cache.get(&"a"), None);
//! assert_eq!(cache.get(&"c"), Some(&3));
//! ```

#![warn(missing_docs)]

mod cache;
mod lru;
mod stats;

pub use cache::BoundCache;
pub use lru::LruCache;
pub use stats::{CacheStats, StatsSnapshot};
