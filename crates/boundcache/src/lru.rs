//! Arena-backed LRU cache.
//!
//! The recency list is a doubly-linked list whose nodes live in a slot
//! arena (`Vec<Option<Node>>`); prev/next links and the lookup index hold
//! plain slot indices, so the arena is the sole owner of every entry and
//! eviction can never leave a dangling reference.

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;

/// One cached entry plus its position in the recency list.
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Fixed-capacity cache with least-recently-used eviction.
///
/// The front of the recency list is the most recently touched entry, the
/// back is the next eviction victim. Capacity is fixed at construction.
/// A capacity of 0 is legal: every insertion is evicted on the spot, so
/// the cache never retains a key.
pub struct LruCache<K, V> {
    index: HashMap<K, usize, RandomState>,
    slots: Vec<Option<Node<K, V>>>,
    head: Option<usize>,
    tail: Option<usize>,
    free: Vec<usize>,
    capacity: usize,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create an empty cache that holds at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            slots: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free: Vec::new(),
            capacity,
        }
    }

    /// Look up a key and mark it most recently used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.move_to_front(idx);
        self.slots[idx].as_ref().map(|node| &node.value)
    }

    /// Look up a key without disturbing recency order.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.slots[idx].as_ref().map(|node| &node.value)
    }

    /// Insert or overwrite a key, marking it most recently used.
    ///
    /// Returns the evicted entry when the insertion pushed the cache over
    /// capacity. Overwrites never evict.
    pub fn put(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.index.get(&key) {
            if let Some(node) = &mut self.slots[idx] {
                node.value = value;
            }
            self.move_to_front(idx);
            return None;
        }

        let idx = self.alloc_slot();
        self.slots[idx] = Some(Node {
            key: key.clone(),
            value,
            prev: None,
            next: None,
        });
        self.push_front(idx);
        self.index.insert(key, idx);

        self.trim_to_capacity()
    }

    /// Remove a key, returning its value if it was resident.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.index.remove(key)?;
        self.unlink(idx);
        let node = self.slots[idx].take()?;
        self.free_slot(idx);
        Some(node.value)
    }

    /// Whether the key is currently resident. Does not touch recency.
    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Number of resident entries, always in `0..=capacity`.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The capacity fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.index.clear();
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }
        self.unlink(idx);
        self.push_front(idx);
    }

    /// Detach a slot from the list by relinking its neighbors. The slot's
    /// own links are left stale; `push_front` rewrites them.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match &self.slots[idx] {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.slots[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.slots[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    fn push_front(&mut self, idx: usize) {
        if let Some(node) = &mut self.slots[idx] {
            node.prev = None;
            node.next = self.head;
        }

        if let Some(head_idx) = self.head {
            if let Some(head_node) = &mut self.slots[head_idx] {
                head_node.prev = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
    }

    /// Evict the back-most entry if the cache is over capacity.
    ///
    /// Runs after insertion, so a zero-capacity cache evicts the key it
    /// just admitted. Each `put` grows the cache by at most one entry, so
    /// a single eviction is always enough.
    fn trim_to_capacity(&mut self) -> Option<(K, V)> {
        if self.index.len() <= self.capacity {
            return None;
        }

        let idx = self.tail?;
        self.unlink(idx);
        let node = self.slots[idx].take()?;
        self.index.remove(&node.key);
        self.free_slot(idx);
        Some((node.key, node.value))
    }

    fn alloc_slot(&mut self) -> usize {
        if let Some(idx) = self.free.pop() {
            idx
        } else {
            let idx = self.slots.len();
            self.slots.push(None);
            idx
        }
    }

    fn free_slot(&mut self, idx: usize) {
        self.free.push(idx);
    }
}
