//! LRU (Least Recently Used) map implementation
//!
//! Entries live in a slot arena; the recency list and the hash index both
//! refer to them by slot number, so no entry has more than one owner.
//!
//! The list runs from head (most recently used) to tail (least recently used).
//! New keys are linked in at the head. Updating an existing key keeps its
//! position unless the map was built with [`UpdatePolicy::Promote`]. Reads
//! never move an entry.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use ahash::RandomState;
use tracing::{debug, trace};

use crate::config::{LruConfig, UpdatePolicy};
use crate::error::{Error, Result};
use crate::iter::{Iter, Keys, Values};
use crate::stats::CacheStats;

/// Node in the LRU doubly-linked list
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) prev: Option<usize>,
    pub(crate) next: Option<usize>,
}

/// Bounded map that evicts its least recently inserted entry when full
pub struct LruMap<K, V> {
    map: HashMap<K, usize, RandomState>,
    nodes: Vec<Option<Node<K, V>>>,
    head: Option<usize>,
    tail: Option<usize>,
    free_list: Vec<usize>,
    capacity: usize,
    update_policy: UpdatePolicy,
    stats: CacheStats,
}

impl<K, V> LruMap<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Create a new map holding at most `capacity` entries
    ///
    /// # Errors
    /// * `Error::InvalidCapacity` - `capacity` is zero
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(LruConfig::new(capacity))
    }

    /// Create a new map from a full configuration
    ///
    /// # Errors
    /// * `Error::InvalidCapacity` - `config.capacity` is zero
    pub fn with_config(config: LruConfig) -> Result<Self> {
        if config.capacity == 0 {
            return Err(Error::InvalidCapacity(config.capacity));
        }
        Ok(Self::build(config))
    }

    fn build(config: LruConfig) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(config.capacity, RandomState::new()),
            nodes: Vec::with_capacity(config.capacity),
            head: None,
            tail: None,
            free_list: Vec::new(),
            capacity: config.capacity,
            update_policy: config.update_policy,
            stats: CacheStats::new(),
        }
    }

    /// Check whether `key` is present. Does not touch recency or stats.
    pub fn has<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Get the value stored for `key`, or `None` if absent
    ///
    /// The entry keeps its position in the recency list.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.map.get(key) {
            Some(&idx) => {
                self.stats.record_hit();
                self.nodes[idx].as_ref().map(|node| &node.value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Get a mutable reference to the value for `key` without moving it
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.map.get(key) {
            Some(&idx) => {
                self.stats.record_hit();
                self.nodes[idx].as_mut().map(|node| &mut node.value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    /// Insert or update a key-value pair, returning the map for chaining
    pub fn set(&mut self, key: K, value: V) -> &mut Self {
        self.insert(key, value);
        self
    }

    /// Insert or update a key-value pair
    ///
    /// Inserting a new key into a full map first evicts the tail entry,
    /// which is handed back to the caller. Updates never evict.
    pub fn insert(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.map.get(&key) {
            if let Some(node) = &mut self.nodes[idx] {
                node.value = value;
            }
            if self.update_policy == UpdatePolicy::Promote {
                self.move_to_front(idx);
            }
            self.stats.record_update();
            trace!(slot = idx, "updated entry");
            return None;
        }

        let evicted = if self.map.len() >= self.capacity {
            self.evict()
        } else {
            None
        };

        let idx = self.alloc_node();
        self.nodes[idx] = Some(Node {
            key: key.clone(),
            value,
            prev: None,
            next: self.head,
        });

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }

        self.map.insert(key, idx);
        self.stats.record_insert();
        trace!(slot = idx, len = self.map.len(), "inserted entry");

        evicted
    }

    /// Remove `key`, returning its value if it was present
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = *self.map.get(key)?;
        let node = self.detach(idx)?;
        self.stats.record_removal();
        trace!(slot = idx, len = self.map.len(), "removed entry");
        Some(node.value)
    }

    /// Remove `key`, reporting whether it was present
    pub fn delete<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.remove(key).is_some()
    }

    /// Drop every entry. Capacity, policy and stats are kept.
    pub fn clear(&mut self) {
        self.map.clear();
        self.nodes.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
    }

    fn evict(&mut self) -> Option<(K, V)> {
        let tail_idx = self.tail?;
        let node = self.detach(tail_idx)?;
        self.stats.record_eviction();
        debug!(capacity = self.capacity, "evicted least recently used entry");
        Some((node.key, node.value))
    }

    /// Unlink a live slot from the list and the index and release it.
    fn detach(&mut self, idx: usize) -> Option<Node<K, V>> {
        self.unlink(idx);
        let node = self.nodes[idx].take()?;
        self.map.remove(&node.key);
        self.free_node(idx);
        Some(node)
    }

    fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }

        self.unlink(idx);

        if let Some(node) = &mut self.nodes[idx] {
            node.prev = None;
            node.next = self.head;
        }

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.prev = Some(idx);
            }
        }

        self.head = Some(idx);
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = if let Some(node) = &self.nodes[idx] {
            (node.prev, node.next)
        } else {
            return;
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.nodes[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => {
                self.head = next;
            }
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.nodes[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => {
                self.tail = prev;
            }
        }
    }

    fn alloc_node(&mut self) -> usize {
        if let Some(idx) = self.free_list.pop() {
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(None);
            idx
        }
    }

    fn free_node(&mut self, idx: usize) {
        self.free_list.push(idx);
    }
}

impl<K, V> LruMap<K, V> {
    /// Number of live entries
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Maximum number of live entries
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Recency behavior of updates
    pub fn update_policy(&self) -> UpdatePolicy {
        self.update_policy
    }

    /// Activity counters
    pub fn stats(&self) -> &CacheStats {
        &self.stats
    }

    /// Zero the activity counters
    pub fn reset_stats(&self) {
        self.stats.reset();
    }

    /// Most recently used entry, without touching it
    pub fn peek_mru(&self) -> Option<(&K, &V)> {
        self.entry_at(self.head)
    }

    /// Least recently used entry (the next eviction victim), without touching it
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.entry_at(self.tail)
    }

    fn entry_at(&self, idx: Option<usize>) -> Option<(&K, &V)> {
        self.nodes[idx?].as_ref().map(|node| (&node.key, &node.value))
    }

    /// Keys from most to least recently used
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys::new(self.iter())
    }

    /// Values from most to least recently used
    pub fn values(&self) -> Values<'_, K, V> {
        Values::new(self.iter())
    }

    /// Key-value pairs from most to least recently used
    pub fn entries(&self) -> Iter<'_, K, V> {
        self.iter()
    }

    /// Key-value pairs from most to least recently used
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.nodes, self.head, self.map.len())
    }
}

impl<K, V> Default for LruMap<K, V>
where
    K: Hash + Eq + Clone,
{
    fn default() -> Self {
        Self::build(LruConfig::default())
    }
}

impl<'a, K, V> IntoIterator for &'a LruMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for LruMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
