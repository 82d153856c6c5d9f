//! Builder for adaptive caches.
//!
//! Collects capacity, ghost bound, starting split, adaptation rule and ghost
//! admission, validates them together and produces an [`AdaptiveCache`] (or a
//! [`ConcurrentAdaptiveCache`] with the `concurrency` feature).
//!
//! ## Example
//!
//! ```rust
//! use adaptive_pipeline::builder::{AdaptationRule, AdaptiveCacheBuilder};
//! use adaptive_pipeline::traits::CoreCache;
//!
//! let mut cache = AdaptiveCacheBuilder::new(100)
//!     .ghost_capacity(200)
//!     .adaptation(AdaptationRule::Proportional)
//!     .build::<u64, String>();
//! cache.put(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! ```

use std::hash::Hash;

use crate::error::InvalidArgument;
pub use crate::policy::adaptive::{AdaptationRule, GhostAdmission};
use crate::policy::adaptive::AdaptiveCache;
#[cfg(feature = "concurrency")]
use crate::policy::adaptive::ConcurrentAdaptiveCache;

/// Configures and creates an [`AdaptiveCache`].
#[derive(Debug, Clone)]
pub struct AdaptiveCacheBuilder {
    capacity: usize,
    ghost_capacity: Option<usize>,
    initial_split: usize,
    rule: AdaptationRule,
    admission: GhostAdmission,
}

impl AdaptiveCacheBuilder {
    /// Starts a builder for a cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            ghost_capacity: None,
            initial_split: 0,
            rule: AdaptationRule::default(),
            admission: GhostAdmission::default(),
        }
    }

    /// Bound on each ghost list. Defaults to the cache capacity; zero
    /// disables ghost tracking and therefore adaptation.
    pub fn ghost_capacity(mut self, ghost_capacity: usize) -> Self {
        self.ghost_capacity = Some(ghost_capacity);
        self
    }

    /// Split parameter at construction and after `clear`. Defaults to 0.
    pub fn initial_split(mut self, split: usize) -> Self {
        self.initial_split = split;
        self
    }

    pub fn adaptation(mut self, rule: AdaptationRule) -> Self {
        self.rule = rule;
        self
    }

    pub fn ghost_admission(mut self, admission: GhostAdmission) -> Self {
        self.admission = admission;
        self
    }

    fn validate(&self) -> Result<(), InvalidArgument> {
        if self.capacity == 0 {
            return Err(InvalidArgument::new(
                "maxsize must be greater than zero, got 0",
            ));
        }
        if self.initial_split > self.capacity {
            return Err(InvalidArgument::new(format!(
                "initial split {} exceeds maxsize {}",
                self.initial_split, self.capacity
            )));
        }
        Ok(())
    }

    /// Builds the cache, returning an error on invalid parameters.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if the capacity is zero or the initial
    /// split exceeds the capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use adaptive_pipeline::builder::AdaptiveCacheBuilder;
    ///
    /// assert!(AdaptiveCacheBuilder::new(8).initial_split(9).try_build::<u8, u8>().is_err());
    /// assert!(AdaptiveCacheBuilder::new(8).initial_split(8).try_build::<u8, u8>().is_ok());
    /// ```
    pub fn try_build<K, V>(self) -> Result<AdaptiveCache<K, V>, InvalidArgument>
    where
        K: Clone + Eq + Hash,
    {
        self.validate()?;
        Ok(AdaptiveCache::from_parts(
            self.capacity,
            self.ghost_capacity.unwrap_or(self.capacity),
            self.initial_split,
            self.rule,
            self.admission,
        ))
    }

    /// Builds the cache.
    ///
    /// # Panics
    ///
    /// Panics if the parameters are invalid. For a non-panicking alternative,
    /// use [`try_build`](Self::try_build).
    pub fn build<K, V>(self) -> AdaptiveCache<K, V>
    where
        K: Clone + Eq + Hash,
    {
        match self.try_build() {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Builds a shared, mutex-guarded cache.
    ///
    /// # Errors
    ///
    /// Same as [`try_build`](Self::try_build).
    #[cfg(feature = "concurrency")]
    pub fn try_build_concurrent<K, V>(self) -> Result<ConcurrentAdaptiveCache<K, V>, InvalidArgument>
    where
        K: Clone + Eq + Hash,
    {
        self.try_build().map(ConcurrentAdaptiveCache::from)
    }
}
