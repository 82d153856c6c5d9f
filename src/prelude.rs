//! Common imports for working with the adaptive cache.
//!
//! ```
//! use adaptive_pipeline::prelude::*;
//!
//! let mut cache: AdaptiveCache<u32, &str> = AdaptiveCache::new(4).unwrap();
//! cache.put(1, "one");
//! assert!(cache.contains(&1));
//! ```

pub use crate::builder::{AdaptationRule, AdaptiveCacheBuilder, GhostAdmission};
pub use crate::create_cache;
pub use crate::ds::{GhostList, IntrusiveList, SlotArena, SlotId};
pub use crate::error::{InvalidArgument, InvariantError};
#[cfg(feature = "metrics")]
pub use crate::metrics::{
    AdaptiveMetrics, AdaptiveMetricsSnapshot, MetricsExporter, MetricsSnapshotProvider,
    PrometheusTextExporter,
};
#[cfg(feature = "concurrency")]
pub use crate::policy::adaptive::ConcurrentAdaptiveCache;
pub use crate::policy::adaptive::{AdaptiveCache, Residency};
pub use crate::traits::{
    AdaptiveCacheTrait, ConcurrentCache, CoreCache, MutableCache, ReadOnlyCache,
};
