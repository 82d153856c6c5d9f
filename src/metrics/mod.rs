//! Operation counters for the adaptive cache (feature `metrics`).

pub mod exporter;
pub mod metrics_impl;
pub mod snapshot;
pub mod traits;

pub use exporter::PrometheusTextExporter;
pub use metrics_impl::AdaptiveMetrics;
pub use snapshot::AdaptiveMetricsSnapshot;
pub use traits::{
    AdaptiveMetricsRecorder, CoreMetricsRecorder, MetricsExporter, MetricsSnapshotProvider,
};
