/// Point-in-time copy of [`AdaptiveMetrics`](crate::metrics::metrics_impl::AdaptiveMetrics)
/// plus gauges read from the cache when the snapshot is taken.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AdaptiveMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,

    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub clears: u64,

    pub promotions: u64,
    pub recency_ghost_hits: u64,
    pub frequency_ghost_hits: u64,
    pub split_increases: u64,
    pub split_decreases: u64,
    pub recency_evictions: u64,
    pub frequency_evictions: u64,
    pub ghosts_forgotten: u64,

    // gauges captured at snapshot time
    pub cache_len: usize,
    pub capacity: usize,
    pub split: usize,
    pub recency_len: usize,
    pub frequency_len: usize,
    pub recency_ghost_len: usize,
    pub frequency_ghost_len: usize,
}

impl AdaptiveMetricsSnapshot {
    /// Fraction of `get` calls that hit, or `0.0` before any call.
    pub fn hit_rate(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }
}
