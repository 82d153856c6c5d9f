//! Bounded history of evicted keys.
//!
//! The adaptive cache keeps one of these per residency list. Keys are stored
//! without values; a later request for a remembered key is the signal that
//! moves the split parameter.
//!
//! ```text
//!   index: FxHashMap<K, SlotId>        keys: IntrusiveList<K>
//!   ┌─────────┬─────────┐              head ─► [C] ◄──► [B] ◄──► [A] ◄── tail
//!   │  key A  │  id_0   │                 newest                   oldest
//!   │  key B  │  id_1   │
//!   └─────────┴─────────┘
//! ```
//!
//! `record` on a full list forgets the oldest key. `debug_validate_invariants()`
//! is available in debug/test builds.
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::ds::intrusive_list::IntrusiveList;
use crate::ds::slot_arena::SlotId;

/// Bounded MRU→LRU list of keys with O(1) membership checks.
#[derive(Debug)]
pub struct GhostList<K> {
    keys: IntrusiveList<K>,
    index: FxHashMap<K, SlotId>,
    capacity: usize,
}

impl<K> GhostList<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates a ghost list that remembers at most `capacity` keys.
    pub fn new(capacity: usize) -> Self {
        Self {
            keys: IntrusiveList::new(),
            index: FxHashMap::default(),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Remembers `key` as the newest entry.
    ///
    /// Returns the key that was forgotten to stay within capacity, if any.
    pub fn record(&mut self, key: K) -> Option<K> {
        if self.capacity == 0 {
            return None;
        }

        if let Some(&id) = self.index.get(&key) {
            self.keys.move_to_front(id);
            return None;
        }

        let mut forgotten = None;
        if self.keys.len() >= self.capacity
            && let Some(oldest) = self.keys.pop_back()
        {
            self.index.remove(&oldest);
            forgotten = Some(oldest);
        }

        let id = self.keys.push_front(key.clone());
        self.index.insert(key, id);
        forgotten
    }

    /// Forgets `key`; returns `true` if it was remembered.
    pub fn remove(&mut self, key: &K) -> bool {
        match self.index.remove(key) {
            Some(id) => {
                self.keys.remove(id);
                true
            },
            None => false,
        }
    }

    /// Iterates remembered keys from newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.keys.iter()
    }

    pub fn clear(&mut self) {
        self.keys.clear();
        self.index.clear();
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        self.keys.debug_validate_invariants();
        assert_eq!(self.keys.len(), self.index.len());
        assert!(self.keys.len() <= self.capacity);
        for (key, &id) in &self.index {
            assert!(self.keys.get(id) == Some(key), "index points at wrong slot");
        }
    }
}
