//! adaptive_pipeline: a bounded key-value cache with adaptive replacement.
//!
//! The cache keeps two LRU lists, one for keys seen once and one for keys seen
//! repeatedly, and remembers recently evicted keys in two ghost lists. Hits on
//! those ghosts steer how much of the capacity each list may use, so the cache
//! tracks whichever of recency or frequency currently predicts reuse better.
//!
//! ## Modules
//!
//! - [`policy::adaptive`]: the cache itself and its concurrent wrapper
//! - [`builder`]: tuning knobs (ghost bound, adaptation rule, admission)
//! - [`traits`]: the `ReadOnlyCache` / `CoreCache` / `MutableCache` seam
//! - [`ds`]: slot arena, intrusive list and ghost list
//! - [`metrics`]: counters, snapshots and a Prometheus text exporter
//!   (feature `metrics`)
//!
//! ## Quick Start
//!
//! ```
//! use adaptive_pipeline::create_cache;
//! use adaptive_pipeline::traits::{CoreCache, ReadOnlyCache};
//!
//! let mut cache = create_cache::<&str, i32>(2).unwrap();
//! cache.put("a", 1);
//! cache.get(&"a");
//! cache.put("b", 2);
//! cache.put("c", 3);
//!
//! assert_eq!(cache.get(&"a"), Some(&1));
//! assert_eq!(cache.get(&"b"), None);
//! assert_eq!(cache.len(), 2);
//! ```

pub mod builder;
pub mod ds;
pub mod error;
#[cfg(feature = "metrics")]
pub mod metrics;
pub mod policy;
pub mod prelude;
pub mod traits;

use std::hash::Hash;

use crate::error::InvalidArgument;
use crate::policy::adaptive::AdaptiveCache;

/// Crate version, as recorded in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn version() -> &'static str {
    VERSION
}

/// Creates an [`AdaptiveCache`] with default settings holding at most
/// `maxsize` entries.
///
/// # Errors
///
/// Returns [`InvalidArgument`] if `maxsize` is zero.
pub fn create_cache<K, V>(maxsize: usize) -> Result<AdaptiveCache<K, V>, InvalidArgument>
where
    K: Clone + Eq + Hash,
{
    AdaptiveCache::new(maxsize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::ReadOnlyCache;

    #[test]
    fn version_matches_manifest() {
        assert_eq!(version(), env!("CARGO_PKG_VERSION"));
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn factory_builds_default_cache() {
        let cache = create_cache::<u64, u64>(8).unwrap();
        assert_eq!(cache.capacity(), 8);
        assert_eq!(cache.split(), 0);
        assert!(create_cache::<u64, u64>(0).is_err());
    }
}
