//! Adaptive replacement cache with a ghost-driven recency/frequency split.
//!
//! Resident entries live in one of two LRU lists: the recency list holds keys
//! seen once since admission, the frequency list holds keys seen at least
//! twice. Keys evicted from either list are remembered (without values) in a
//! matching ghost list. A request for a remembered key means the cache gave up
//! on it too early, and moves the split parameter toward the list it came from.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────────┐
//! │                       AdaptiveCache<K, V> Layout                         │
//! │                                                                          │
//! │   index: FxHashMap<K, Slot { list, id }>                                 │
//! │                                                                          │
//! │   recency (T1, seen once)               frequency (T2, seen twice+)      │
//! │   ┌──────────────────────────┐          ┌──────────────────────────┐     │
//! │   │ MRU                 LRU  │          │ MRU                 LRU  │     │
//! │   │ [c] ◄──► [b] ◄──► [a] ──┼─evict─┐  │ [x] ◄──► [y] ◄──► [z] ──┼─┐   │
//! │   └──────────────────────────┘       │  └──────────────────────────┘ │   │
//! │                                       ▼                               ▼   │
//! │   recency ghost (B1, keys only)         frequency ghost (B2, keys only)  │
//! │                                                                          │
//! │   split p ∈ [0, capacity]: target size of the recency list               │
//! │     • request for a B1 key → p grows   (favor recency)                   │
//! │     • request for a B2 key → p shrinks (favor frequency)                 │
//! └──────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Replacement Rule
//!
//! ```text
//!   evict_one():
//!     if |T1| > p or T2 is empty:
//!       evict T1 LRU → remember key in B1
//!     else:
//!       evict T2 LRU → remember key in B2
//! ```
//!
//! A ghost list at its bound forgets its own oldest key.
//!
//! ## Entry Lifecycle
//!
//! ```text
//!   absent ──put──► T1 ──get/put──► T2 ──evict──► B2 ──age out──► absent
//!                    │                             │
//!                    └──evict──► B1 ──age out──► absent
//!                                 │
//!                                 └──re-request──► adapt p, then re-admit
//! ```
//!
//! ## Operations
//!
//! | Operation    | Time   | Notes                                         |
//! |--------------|--------|-----------------------------------------------|
//! | `get`        | O(1)   | Promotes T1→T2; a ghost miss adapts `p`       |
//! | `put`        | O(1)   | May evict one entry                           |
//! | `peek`       | O(1)   | No reordering, no adaptation                  |
//! | `remove`     | O(1)   | Not an eviction: nothing is remembered        |
//! | `pop_victim` | O(1)   | Runs the replacement rule once                |
//! | `clear`      | O(n)   | Drops entries and ghosts, resets `p`          |
//!
//! ## Example Usage
//!
//! ```
//! use adaptive_pipeline::policy::adaptive::AdaptiveCache;
//! use adaptive_pipeline::traits::{CoreCache, ReadOnlyCache};
//!
//! let mut cache = AdaptiveCache::new(2).unwrap();
//! cache.put("a", 1);
//! cache.put("b", 2);
//! cache.put("c", 3); // "a" is the recency LRU and is evicted
//!
//! assert_eq!(cache.get(&"a"), None);
//! assert_eq!(cache.get(&"b"), Some(&2));
//! assert_eq!(cache.get(&"c"), Some(&3));
//! assert_eq!(cache.len(), 2);
//! ```
//!
//! ## Thread Safety
//!
//! [`AdaptiveCache`] needs `&mut self` for every reordering operation. Wrap it
//! in a lock to share it, or enable the `concurrency` feature for
//! [`ConcurrentAdaptiveCache`].
//!
//! ## References
//!
//! - Megiddo & Modha, "ARC: A Self-Tuning, Low Overhead Replacement Cache",
//!   FAST 2003

use std::fmt;
use std::hash::Hash;
#[cfg(feature = "concurrency")]
use std::sync::Arc;

#[cfg(feature = "concurrency")]
use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::builder::AdaptiveCacheBuilder;
use crate::ds::{GhostList, IntrusiveList, SlotId};
use crate::error::{InvalidArgument, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::{
    AdaptiveMetrics, AdaptiveMetricsRecorder, AdaptiveMetricsSnapshot, CoreMetricsRecorder,
    MetricsSnapshotProvider,
};
#[cfg(feature = "concurrency")]
use crate::traits::ConcurrentCache;
use crate::traits::{AdaptiveCacheTrait, CoreCache, MutableCache, ReadOnlyCache};

/// Which residency list (or ghost list) a key belongs to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Residency {
    /// Seen once since admission (T1), or evicted from T1 (B1).
    Recency,
    /// Seen at least twice (T2), or evicted from T2 (B2).
    Frequency,
}

/// How far the split parameter moves on a ghost hit.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum AdaptationRule {
    /// Move by exactly one.
    #[default]
    Unit,
    /// Move by `max(1, ceil(|other ghost| / |hit ghost|))`, as in the ARC paper.
    Proportional,
}

impl AdaptationRule {
    fn delta(self, hit_ghost_len: usize, other_ghost_len: usize) -> usize {
        match self {
            AdaptationRule::Unit => 1,
            AdaptationRule::Proportional => {
                if hit_ghost_len == 0 || other_ghost_len <= hit_ghost_len {
                    1
                } else {
                    other_ghost_len.div_ceil(hit_ghost_len)
                }
            },
        }
    }
}

/// Where a key re-requested from a ghost list is re-admitted.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum GhostAdmission {
    /// Re-admit like any new key, at the recency MRU.
    #[default]
    Recency,
    /// Re-admit straight into the frequency MRU, as in the ARC paper.
    Frequency,
}

/// Upper bound on slots reserved up front; larger caches grow on demand.
const MAX_PREALLOC: usize = 4096;

struct Resident<K, V> {
    key: K,
    value: V,
}

#[derive(Copy, Clone, Debug)]
struct Slot {
    list: Residency,
    id: SlotId,
}

/// Bounded cache that adapts its recency/frequency split to the workload.
///
/// # Type Parameters
///
/// - `K`: Key type, must be `Clone + Eq + Hash`
/// - `V`: Value type
///
/// # Example
///
/// ```
/// use adaptive_pipeline::policy::adaptive::{AdaptiveCache, Residency};
/// use adaptive_pipeline::traits::{AdaptiveCacheTrait, CoreCache};
///
/// let mut cache = AdaptiveCache::new(2).unwrap();
/// cache.put("a", 1);
/// cache.get(&"a"); // second access: promoted to the frequency list
/// cache.put("b", 2);
/// cache.put("c", 3); // "b" is the only recency candidate
///
/// assert_eq!(cache.residency(&"a"), Some(Residency::Frequency));
/// assert_eq!(cache.get(&"b"), None);
/// ```
pub struct AdaptiveCache<K, V>
where
    K: Clone + Eq + Hash,
{
    index: FxHashMap<K, Slot>,
    recency: IntrusiveList<Resident<K, V>>,
    frequency: IntrusiveList<Resident<K, V>>,
    recency_ghost: GhostList<K>,
    frequency_ghost: GhostList<K>,
    // Ghost hits consumed by a `get` miss, awaiting the `put` that re-admits
    // them. Only filled under `GhostAdmission::Frequency`.
    readmit: GhostList<K>,
    split: usize,
    initial_split: usize,
    capacity: usize,
    rule: AdaptationRule,
    admission: GhostAdmission,
    #[cfg(feature = "metrics")]
    metrics: AdaptiveMetrics,
}

impl<K, V> AdaptiveCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates a cache holding at most `capacity` entries.
    ///
    /// Ghost lists remember up to `capacity` keys each; the split starts at 0.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if `capacity` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use adaptive_pipeline::policy::adaptive::AdaptiveCache;
    /// use adaptive_pipeline::traits::ReadOnlyCache;
    ///
    /// let cache: AdaptiveCache<String, u32> = AdaptiveCache::new(100).unwrap();
    /// assert_eq!(cache.capacity(), 100);
    /// assert_eq!(cache.split(), 0);
    /// assert!(AdaptiveCache::<String, u32>::new(0).is_err());
    /// ```
    pub fn new(capacity: usize) -> Result<Self, InvalidArgument> {
        AdaptiveCacheBuilder::new(capacity).try_build()
    }

    /// Returns a builder for tuning ghost bounds and the adaptation rule.
    pub fn builder(capacity: usize) -> AdaptiveCacheBuilder {
        AdaptiveCacheBuilder::new(capacity)
    }

    /// Assembles a cache from parameters the builder already validated.
    pub(crate) fn from_parts(
        capacity: usize,
        ghost_capacity: usize,
        initial_split: usize,
        rule: AdaptationRule,
        admission: GhostAdmission,
    ) -> Self {
        let prealloc = capacity.min(MAX_PREALLOC);
        Self {
            index: FxHashMap::with_capacity_and_hasher(prealloc, Default::default()),
            recency: IntrusiveList::with_capacity(prealloc),
            frequency: IntrusiveList::with_capacity(prealloc),
            recency_ghost: GhostList::new(ghost_capacity),
            frequency_ghost: GhostList::new(ghost_capacity),
            readmit: GhostList::new(ghost_capacity),
            split: initial_split,
            initial_split,
            capacity,
            rule,
            admission,
            #[cfg(feature = "metrics")]
            metrics: AdaptiveMetrics::default(),
        }
    }

    /// Current target size of the recency list.
    pub fn split(&self) -> usize {
        self.split
    }

    /// Number of resident entries seen once since admission.
    pub fn recency_len(&self) -> usize {
        self.recency.len()
    }

    /// Number of resident entries seen at least twice.
    pub fn frequency_len(&self) -> usize {
        self.frequency.len()
    }

    /// Number of keys remembered after eviction from the recency list.
    pub fn recency_ghost_len(&self) -> usize {
        self.recency_ghost.len()
    }

    /// Number of keys remembered after eviction from the frequency list.
    pub fn frequency_ghost_len(&self) -> usize {
        self.frequency_ghost.len()
    }

    /// Bound on each ghost list.
    pub fn ghost_capacity(&self) -> usize {
        self.recency_ghost.capacity()
    }

    /// Step rule applied to the split on a ghost hit.
    pub fn adaptation_rule(&self) -> AdaptationRule {
        self.rule
    }

    /// List a key enters when re-admitted after a ghost hit.
    pub fn ghost_admission(&self) -> GhostAdmission {
        self.admission
    }

    /// Residency list holding `key`, if it is resident.
    pub fn residency(&self, key: &K) -> Option<Residency> {
        self.index.get(key).map(|slot| slot.list)
    }

    /// Ghost list remembering `key`, if any.
    pub fn ghost_residency(&self, key: &K) -> Option<Residency> {
        if self.recency_ghost.contains(key) {
            Some(Residency::Recency)
        } else if self.frequency_ghost.contains(key) {
            Some(Residency::Frequency)
        } else {
            None
        }
    }

    /// Looks up `key` without promotion or adaptation.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let slot = self.index.get(key)?;
        self.list(slot.list).get(slot.id).map(|r| &r.value)
    }

    /// Like [`get`](CoreCache::get), falling back to `default` on a miss.
    ///
    /// ```
    /// use adaptive_pipeline::policy::adaptive::AdaptiveCache;
    /// use adaptive_pipeline::traits::CoreCache;
    ///
    /// let mut cache = AdaptiveCache::new(4).unwrap();
    /// cache.put(1, (0.5, 10u64));
    /// let fallback = (0.0, 0u64);
    /// assert_eq!(*cache.get_or(&1, &fallback), (0.5, 10));
    /// assert_eq!(*cache.get_or(&2, &fallback), (0.0, 0));
    /// ```
    pub fn get_or<'a>(&'a mut self, key: &K, default: &'a V) -> &'a V {
        self.get(key).unwrap_or(default)
    }

    /// Iterates resident entries, frequency list first, each from MRU to LRU.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.frequency
            .iter()
            .chain(self.recency.iter())
            .map(|r| (&r.key, &r.value))
    }

    /// Resident keys in [`iter`](Self::iter) order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(k, _)| k)
    }

    /// Resident values in [`iter`](Self::iter) order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, v)| v)
    }

    /// Evicts the entry the replacement rule selects and returns it.
    pub fn pop_victim(&mut self) -> Option<(K, V)> {
        #[cfg(feature = "metrics")]
        self.metrics.record_evict_call();

        self.evict_one()
    }

    fn list(&self, which: Residency) -> &IntrusiveList<Resident<K, V>> {
        match which {
            Residency::Recency => &self.recency,
            Residency::Frequency => &self.frequency,
        }
    }

    /// Moves a resident key to the frequency MRU and returns its new handle.
    fn promote(&mut self, key: &K) -> Option<SlotId> {
        let slot = self.index.get_mut(key)?;
        match slot.list {
            Residency::Recency => {
                let resident = self.recency.remove(slot.id)?;
                slot.id = self.frequency.push_front(resident);
                slot.list = Residency::Frequency;

                #[cfg(feature = "metrics")]
                self.metrics.record_promotion();
            },
            Residency::Frequency => {
                self.frequency.move_to_front(slot.id);
            },
        }
        Some(slot.id)
    }

    /// Applies the adaptation rule if `key` is remembered, then forgets it.
    fn consume_ghost(&mut self, key: &K) -> Option<Residency> {
        let hit = self.ghost_residency(key)?;
        self.adapt(hit);
        match hit {
            Residency::Recency => self.recency_ghost.remove(key),
            Residency::Frequency => self.frequency_ghost.remove(key),
        };
        Some(hit)
    }

    fn adapt(&mut self, hit: Residency) {
        let (b1, b2) = (self.recency_ghost.len(), self.frequency_ghost.len());
        let before = self.split;
        match hit {
            Residency::Recency => {
                let delta = self.rule.delta(b1, b2);
                self.split = (self.split + delta).min(self.capacity);
            },
            Residency::Frequency => {
                let delta = self.rule.delta(b2, b1);
                self.split = self.split.saturating_sub(delta);
            },
        }
        trace!(ghost = ?hit, before, after = self.split, "ghost hit adapted split");

        #[cfg(feature = "metrics")]
        {
            match hit {
                Residency::Recency => self.metrics.record_recency_ghost_hit(),
                Residency::Frequency => self.metrics.record_frequency_ghost_hit(),
            }
            if self.split > before {
                self.metrics.record_split_increase();
            } else if self.split < before {
                self.metrics.record_split_decrease();
            }
        }
    }

    fn evict_one(&mut self) -> Option<(K, V)> {
        let from_recency = self.recency.len() > self.split || self.frequency.is_empty();
        let (source, list, ghost) = if from_recency {
            (Residency::Recency, &mut self.recency, &mut self.recency_ghost)
        } else {
            (Residency::Frequency, &mut self.frequency, &mut self.frequency_ghost)
        };

        let Resident { key, value } = list.pop_back()?;
        self.index.remove(&key);
        let forgotten = ghost.record(key.clone());
        trace!(
            list = ?source,
            split = self.split,
            forgot_ghost = forgotten.is_some(),
            "evicted entry"
        );

        #[cfg(feature = "metrics")]
        {
            self.metrics.record_evicted_entry();
            match source {
                Residency::Recency => self.metrics.record_recency_eviction(),
                Residency::Frequency => self.metrics.record_frequency_eviction(),
            }
            if forgotten.is_some() {
                self.metrics.record_ghost_forgotten();
            }
        }

        Some((key, value))
    }

    /// Checks every structural invariant, returning the first violation.
    ///
    /// ```
    /// use adaptive_pipeline::policy::adaptive::AdaptiveCache;
    /// use adaptive_pipeline::traits::CoreCache;
    ///
    /// let mut cache = AdaptiveCache::new(3).unwrap();
    /// for i in 0..10 {
    ///     cache.put(i, i);
    /// }
    /// assert!(cache.check_invariants().is_ok());
    /// ```
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let resident = self.recency.len() + self.frequency.len();
        if resident > self.capacity {
            return Err(InvariantError::new(format!(
                "resident count {} exceeds capacity {}",
                resident, self.capacity
            )));
        }
        if self.index.len() != resident {
            return Err(InvariantError::new(format!(
                "index holds {} keys but lists hold {}",
                self.index.len(),
                resident
            )));
        }
        if self.split > self.capacity {
            return Err(InvariantError::new(format!(
                "split {} outside [0, {}]",
                self.split, self.capacity
            )));
        }
        for (name, ghost) in [
            ("recency", &self.recency_ghost),
            ("frequency", &self.frequency_ghost),
        ] {
            if ghost.len() > ghost.capacity() {
                return Err(InvariantError::new(format!(
                    "{} ghost holds {} keys, bound is {}",
                    name,
                    ghost.len(),
                    ghost.capacity()
                )));
            }
            if ghost.iter().any(|key| self.index.contains_key(key)) {
                return Err(InvariantError::new(format!(
                    "{} ghost remembers a resident key",
                    name
                )));
            }
        }
        if self
            .recency_ghost
            .iter()
            .any(|key| self.frequency_ghost.contains(key))
        {
            return Err(InvariantError::new("key remembered by both ghost lists"));
        }
        if self.readmit.iter().any(|key| self.index.contains_key(key)) {
            return Err(InvariantError::new("resident key still awaits re-admission"));
        }
        for (which, list) in [
            (Residency::Recency, &self.recency),
            (Residency::Frequency, &self.frequency),
        ] {
            for resident in list.iter() {
                match self.index.get(&resident.key) {
                    Some(slot) if slot.list == which => {},
                    _ => {
                        return Err(InvariantError::new(format!(
                            "{:?} list entry is not indexed under that list",
                            which
                        )));
                    },
                }
            }
        }
        Ok(())
    }

    #[cfg(any(test, debug_assertions))]
    /// Panics if any invariant is violated.
    pub fn debug_validate_invariants(&self) {
        self.recency.debug_validate_invariants();
        self.frequency.debug_validate_invariants();
        self.recency_ghost.debug_validate_invariants();
        self.frequency_ghost.debug_validate_invariants();
        self.readmit.debug_validate_invariants();
        if let Err(err) = self.check_invariants() {
            panic!("adaptive cache invariant violated: {}", err);
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> AdaptiveCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Counters recorded since construction or the last reset.
    pub fn metrics(&self) -> &AdaptiveMetrics {
        &self.metrics
    }

    pub fn reset_metrics(&mut self) {
        self.metrics = AdaptiveMetrics::default();
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<AdaptiveMetricsSnapshot> for AdaptiveCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn snapshot(&self) -> AdaptiveMetricsSnapshot {
        let m = &self.metrics;
        AdaptiveMetricsSnapshot {
            get_calls: m.get_calls,
            get_hits: m.get_hits,
            get_misses: m.get_misses,
            insert_calls: m.insert_calls,
            insert_updates: m.insert_updates,
            insert_new: m.insert_new,
            evict_calls: m.evict_calls,
            evicted_entries: m.evicted_entries,
            clears: m.clears,
            promotions: m.promotions,
            recency_ghost_hits: m.recency_ghost_hits,
            frequency_ghost_hits: m.frequency_ghost_hits,
            split_increases: m.split_increases,
            split_decreases: m.split_decreases,
            recency_evictions: m.recency_evictions,
            frequency_evictions: m.frequency_evictions,
            ghosts_forgotten: m.ghosts_forgotten,
            cache_len: self.len(),
            capacity: self.capacity,
            split: self.split,
            recency_len: self.recency.len(),
            frequency_len: self.frequency.len(),
            recency_ghost_len: self.recency_ghost.len(),
            frequency_ghost_len: self.frequency_ghost.len(),
        }
    }
}

impl<K, V> fmt::Debug for AdaptiveCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdaptiveCache")
            .field("capacity", &self.capacity)
            .field("recency_len", &self.recency.len())
            .field("frequency_len", &self.frequency.len())
            .field("recency_ghost_len", &self.recency_ghost.len())
            .field("frequency_ghost_len", &self.frequency_ghost.len())
            .field("split", &self.split)
            .field("rule", &self.rule)
            .field("admission", &self.admission)
            .finish()
    }
}

/// One-line summary of the current configuration.
impl<K, V> fmt::Display for AdaptiveCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AdaptiveCache(maxsize={}, currsize={}, recency={}, frequency={}, split={}, ghosts={}/{})",
            self.capacity,
            self.len(),
            self.recency.len(),
            self.frequency.len(),
            self.split,
            self.recency_ghost.len(),
            self.frequency_ghost.len(),
        )
    }
}

impl<K, V> ReadOnlyCache<K, V> for AdaptiveCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    fn len(&self) -> usize {
        self.recency.len() + self.frequency.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<K, V> CoreCache<K, V> for AdaptiveCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn put(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        if let Some(id) = self.promote(&key)
            && let Some(resident) = self.frequency.get_mut(id)
        {
            #[cfg(feature = "metrics")]
            self.metrics.record_insert_update();

            return Some(std::mem::replace(&mut resident.value, value));
        }

        let ghost_hit = self.consume_ghost(&key).is_some();
        let pending = self.readmit.remove(&key);
        let readmitted = ghost_hit || pending;

        if self.len() >= self.capacity {
            #[cfg(feature = "metrics")]
            self.metrics.record_evict_call();

            self.evict_one();
        }

        let target = match (readmitted, self.admission) {
            (true, GhostAdmission::Frequency) => Residency::Frequency,
            _ => Residency::Recency,
        };
        let resident = Resident {
            key: key.clone(),
            value,
        };
        let id = match target {
            Residency::Recency => self.recency.push_front(resident),
            Residency::Frequency => self.frequency.push_front(resident),
        };
        self.index.insert(key, Slot { list: target, id });

        #[cfg(feature = "metrics")]
        self.metrics.record_insert_new();

        None
    }

    fn get(&mut self, key: &K) -> Option<&V> {
        match self.promote(key) {
            Some(id) => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_hit();

                self.frequency.get(id).map(|r| &r.value)
            },
            None => {
                #[cfg(feature = "metrics")]
                self.metrics.record_get_miss();

                if self.consume_ghost(key).is_some()
                    && self.admission == GhostAdmission::Frequency
                {
                    self.readmit.record(key.clone());
                }
                None
            },
        }
    }

    fn clear(&mut self) {
        self.index.clear();
        self.recency.clear();
        self.frequency.clear();
        self.recency_ghost.clear();
        self.frequency_ghost.clear();
        self.readmit.clear();
        self.split = self.initial_split;
        debug!(capacity = self.capacity, "adaptive cache cleared");

        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
    }
}

impl<K, V> MutableCache<K, V> for AdaptiveCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn remove(&mut self, key: &K) -> Option<V> {
        let slot = self.index.remove(key)?;
        let list = match slot.list {
            Residency::Recency => &mut self.recency,
            Residency::Frequency => &mut self.frequency,
        };
        list.remove(slot.id).map(|r| r.value)
    }
}

impl<K, V> AdaptiveCacheTrait<K, V> for AdaptiveCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn peek(&self, key: &K) -> Option<&V> {
        AdaptiveCache::peek(self, key)
    }

    fn pop_victim(&mut self) -> Option<(K, V)> {
        AdaptiveCache::pop_victim(self)
    }

    fn split(&self) -> usize {
        self.split
    }

    fn recency_len(&self) -> usize {
        self.recency.len()
    }

    fn frequency_len(&self) -> usize {
        self.frequency.len()
    }
}

// ---------------------------------------------------------------------------
// Concurrent wrapper
// ---------------------------------------------------------------------------

/// Thread-safe handle to an [`AdaptiveCache`] behind a single mutex.
///
/// Every call holds the lock for its whole duration, so each operation sees
/// the cache exactly as a single caller would. Cloning the handle shares the
/// same cache.
///
/// # Example
///
/// ```
/// # #[cfg(feature = "concurrency")]
/// # {
/// use adaptive_pipeline::policy::adaptive::ConcurrentAdaptiveCache;
///
/// let cache = ConcurrentAdaptiveCache::new(64).unwrap();
/// let writer = cache.clone();
/// std::thread::spawn(move || {
///     writer.put(1u64, "one".to_string());
/// })
/// .join()
/// .unwrap();
/// assert_eq!(cache.get(&1), Some("one".to_string()));
/// # }
/// ```
#[cfg(feature = "concurrency")]
pub struct ConcurrentAdaptiveCache<K, V>
where
    K: Clone + Eq + Hash,
{
    inner: Arc<Mutex<AdaptiveCache<K, V>>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> Clone for ConcurrentAdaptiveCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> From<AdaptiveCache<K, V>> for ConcurrentAdaptiveCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn from(cache: AdaptiveCache<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentAdaptiveCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates a shared cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Result<Self, InvalidArgument> {
        AdaptiveCache::new(capacity).map(Self::from)
    }

    /// Inserts or updates `key`, returning the previous value.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().put(key, value)
    }

    /// Looks up `key` and returns a clone of the value.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Looks up `key` and maps the value under the lock.
    pub fn get_with<R>(&self, key: &K, f: impl FnOnce(&V) -> R) -> Option<R> {
        self.inner.lock().get(key).map(f)
    }

    /// Clone of the value without promotion or adaptation.
    pub fn peek(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().peek(key).cloned()
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn split(&self) -> usize {
        self.inner.lock().split()
    }

    pub fn pop_victim(&self) -> Option<(K, V)> {
        self.inner.lock().pop_victim()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Runs `f` with exclusive access to the underlying cache.
    pub fn with_cache<R>(&self, f: impl FnOnce(&mut AdaptiveCache<K, V>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentCache for ConcurrentAdaptiveCache<K, V>
where
    K: Clone + Eq + Hash + Send,
    V: Send,
{
}
