//! # Cache Trait Hierarchy
//!
//! The capability set the adaptive cache exposes, split the way callers
//! consume it: read-only inspection, the core read/write path, arbitrary
//! removal, and the adaptive policy's own operations.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────┐
//!   │       ReadOnlyCache<K, V>       │
//!   │  contains(&, &K) → bool         │
//!   │  len(&) → usize                 │
//!   │  is_empty(&) → bool             │
//!   │  capacity(&) → usize            │
//!   └────────────────┬────────────────┘
//!                    ▼
//!   ┌─────────────────────────────────┐
//!   │         CoreCache<K, V>         │
//!   │  put(&mut, K, V) → Option<V>    │
//!   │  get(&mut, &K) → Option<&V>     │
//!   │  clear(&mut)                    │
//!   └────────────────┬────────────────┘
//!                    ▼
//!   ┌─────────────────────────────────┐
//!   │       MutableCache<K, V>        │
//!   │  remove(&mut, &K) → Option<V>   │
//!   │  remove_batch(&mut, &[K])       │
//!   └────────────────┬────────────────┘
//!                    ▼
//!   ┌─────────────────────────────────┐
//!   │    AdaptiveCacheTrait<K, V>     │
//!   │  peek(&, &K) → Option<&V>       │
//!   │  pop_victim(&mut) → (K, V)      │
//!   │  split(&) → usize               │
//!   │  recency_len / frequency_len    │
//!   └─────────────────────────────────┘
//! ```
//!
//! [`ConcurrentCache`] is a `Send + Sync` marker for the thread-safe wrapper.
//!
//! ## Example Usage
//!
//! ```
//! use adaptive_pipeline::policy::adaptive::AdaptiveCache;
//! use adaptive_pipeline::traits::{CoreCache, MutableCache, ReadOnlyCache};
//!
//! fn warm<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, &str)]) {
//!     for (key, value) in data {
//!         cache.put(*key, value.to_string());
//!     }
//! }
//!
//! fn invalidate<C: MutableCache<u64, String>>(cache: &mut C, keys: &[u64]) {
//!     cache.remove_batch(keys);
//! }
//!
//! let mut cache = AdaptiveCache::new(16).unwrap();
//! warm(&mut cache, &[(1, "one"), (2, "two"), (3, "three")]);
//! invalidate(&mut cache, &[1, 3]);
//! assert_eq!(cache.len(), 1);
//! ```
//!
//! ## Thread Safety
//!
//! Implementations of these traits take `&mut self` for every operation that
//! can reorder entries. Share them across threads behind a lock, or use
//! `ConcurrentAdaptiveCache` (feature `concurrency`).

/// Inspection that never changes eviction order.
pub trait ReadOnlyCache<K, V> {
    /// Returns `true` if `key` is resident. Does not promote the entry.
    fn contains(&self, key: &K) -> bool;

    /// Returns the number of resident entries.
    fn len(&self) -> usize;

    /// Returns `true` if no entry is resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of resident entries.
    fn capacity(&self) -> usize;
}

/// The read/write path every cache supports.
///
/// # Example
///
/// ```
/// use adaptive_pipeline::policy::adaptive::AdaptiveCache;
/// use adaptive_pipeline::traits::CoreCache;
///
/// let mut cache = AdaptiveCache::new(10).unwrap();
/// assert_eq!(cache.put(1, "first"), None);
/// assert_eq!(cache.put(1, "second"), Some("first"));
/// assert_eq!(cache.get(&1), Some(&"second"));
/// assert_eq!(cache.get(&2), None);
/// ```
pub trait CoreCache<K, V>: ReadOnlyCache<K, V> {
    /// Inserts or updates `key`, returning the previous value if it was resident.
    ///
    /// May evict one entry when the cache is full and `key` is new.
    fn put(&mut self, key: K, value: V) -> Option<V>;

    /// Looks up `key`. A hit may reorder entries; a miss returns `None`.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Drops every entry and all policy state.
    fn clear(&mut self);
}

/// Caches that support removal of an arbitrary key.
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes `key`, returning its value if it was resident.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes every key in `keys`, returning the results in order.
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|key| self.remove(key)).collect()
    }
}

/// Operations specific to a recency/frequency adaptive policy.
///
/// # Example
///
/// ```
/// use adaptive_pipeline::policy::adaptive::AdaptiveCache;
/// use adaptive_pipeline::traits::{AdaptiveCacheTrait, CoreCache};
///
/// let mut cache = AdaptiveCache::new(2).unwrap();
/// cache.put("a", 1);
/// cache.put("b", 2);
///
/// // Peeking does not promote.
/// assert_eq!(cache.peek(&"a"), Some(&1));
/// assert_eq!(cache.recency_len(), 2);
///
/// // The recency LRU is the victim.
/// assert_eq!(cache.pop_victim(), Some(("a", 1)));
/// ```
pub trait AdaptiveCacheTrait<K, V>: MutableCache<K, V> {
    /// Looks up `key` without promotion or adaptation.
    fn peek(&self, key: &K) -> Option<&V>;

    /// Evicts the entry the replacement rule selects and returns it.
    ///
    /// The evicted key is remembered in the matching ghost list.
    fn pop_victim(&mut self) -> Option<(K, V)>;

    /// Current target size of the recency list.
    fn split(&self) -> usize;

    /// Number of entries seen once since admission.
    fn recency_len(&self) -> usize;

    /// Number of entries seen at least twice.
    fn frequency_len(&self) -> usize;
}

/// Marker for cache types that are safe to share between threads.
pub trait ConcurrentCache: Send + Sync {}
