//! Recency-ordered doubly linked list backed by a `SlotArena`.
//!
//! Nodes live in the arena and link to each other by `SlotId`, so handles stay
//! stable while a node is moved around. The front is the most recently used
//! (MRU) end and the back is the least recently used (LRU) end.
//!
//! ```text
//!   head (MRU) ─► [id_2] ◄──► [id_0] ◄──► [id_1] ◄── tail (LRU)
//! ```
//!
//! ## Performance
//! - `push_front` / `pop_back` / `remove` / `move_to_front`: O(1)
//! - `iter`: O(n), MRU to LRU
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use crate::ds::slot_arena::{SlotArena, SlotId};

#[derive(Debug)]
struct Link<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// Doubly linked MRU→LRU list with O(1) splicing by handle.
#[derive(Debug)]
pub struct IntrusiveList<T> {
    arena: SlotArena<Link<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> IntrusiveList<T> {
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|link| &link.value)
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|link| &mut link.value)
    }

    /// Inserts `value` at the MRU end.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Link {
            value,
            prev: None,
            next: None,
        });
        self.link_front(id);
        id
    }

    /// Removes and returns the LRU value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Unlinks `id` and returns its value.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.unlink(id)?;
        self.arena.remove(id).map(|link| link.value)
    }

    /// Moves `id` to the MRU end; `false` if the handle is stale.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.arena.contains(id) {
            return false;
        }
        if self.head != Some(id) {
            self.unlink(id);
            self.link_front(id);
        }
        true
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterates values from MRU to LRU.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.head,
        }
    }

    fn unlink(&mut self, id: SlotId) -> Option<()> {
        let link = self.arena.get(id)?;
        let (prev, next) = (link.prev, link.next);

        match prev.and_then(|p| self.arena.get_mut(p)) {
            Some(prev_link) => prev_link.next = next,
            None => self.head = next,
        }
        match next.and_then(|n| self.arena.get_mut(n)) {
            Some(next_link) => next_link.prev = prev,
            None => self.tail = prev,
        }

        let link = self.arena.get_mut(id)?;
        link.prev = None;
        link.next = None;
        Some(())
    }

    fn link_front(&mut self, id: SlotId) {
        let old_head = self.head;
        if let Some(link) = self.arena.get_mut(id) {
            link.prev = None;
            link.next = old_head;
        }
        match old_head.and_then(|h| self.arena.get_mut(h)) {
            Some(head_link) => head_link.prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none() && self.tail.is_none());
            assert_eq!(self.len(), 0);
            return;
        }

        let mut seen = std::collections::HashSet::new();
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(id) = cursor {
            assert!(seen.insert(id), "cycle at slot {}", id.index());
            let link = self.arena.get(id).expect("linked slot is vacant");
            assert_eq!(link.prev, prev, "broken back-link at slot {}", id.index());
            if link.next.is_none() {
                assert_eq!(self.tail, Some(id));
            }
            prev = Some(id);
            cursor = link.next;
        }
        assert_eq!(seen.len(), self.len());
    }
}

impl<T> Default for IntrusiveList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// MRU→LRU iterator over list values.
pub struct Iter<'a, T> {
    list: &'a IntrusiveList<T>,
    cursor: Option<SlotId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let link = self.list.arena.get(self.cursor?)?;
        self.cursor = link.next;
        Some(&link.value)
    }
}
