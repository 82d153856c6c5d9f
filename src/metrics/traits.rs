//! # Metrics Traits
//!
//! Recording, snapshotting and export are kept in separate traits so the
//! cache only ever writes counters, tests and benches read snapshots, and
//! monitoring backends consume snapshots through an exporter.
//!
//! ```text
//!   ┌─────────────────────────────┐
//!   │     CoreMetricsRecorder     │   get hit/miss, insert new/update,
//!   │                             │   evict, clear
//!   └──────────────┬──────────────┘
//!                  ▼
//!   ┌─────────────────────────────┐
//!   │   AdaptiveMetricsRecorder   │   promotions, ghost hits, split moves,
//!   │                             │   per-list evictions, forgotten ghosts
//!   └─────────────────────────────┘
//!
//!   MetricsSnapshotProvider<S>  ──►  S  ──►  MetricsExporter<S>
//! ```

/// Counters shared by every cache policy.
pub trait CoreMetricsRecorder {
    fn record_get_hit(&mut self);
    fn record_get_miss(&mut self);
    fn record_insert_call(&mut self);
    fn record_insert_new(&mut self);
    fn record_insert_update(&mut self);
    fn record_evict_call(&mut self);
    fn record_evicted_entry(&mut self);
    fn record_clear(&mut self);
}

/// Counters for the recency/frequency adaptive policy.
pub trait AdaptiveMetricsRecorder: CoreMetricsRecorder {
    fn record_promotion(&mut self);
    fn record_recency_ghost_hit(&mut self);
    fn record_frequency_ghost_hit(&mut self);
    fn record_split_increase(&mut self);
    fn record_split_decrease(&mut self);
    fn record_recency_eviction(&mut self);
    fn record_frequency_eviction(&mut self);
    fn record_ghost_forgotten(&mut self);
}

/// Snapshot provider for bench/testing.
pub trait MetricsSnapshotProvider<S> {
    fn snapshot(&self) -> S;
}

/// Publishes snapshots to a monitoring backend.
pub trait MetricsExporter<S> {
    fn export(&self, snapshot: &S);
}
