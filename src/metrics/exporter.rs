use std::io::Write;
use std::sync::{Mutex, PoisonError};

use crate::metrics::snapshot::AdaptiveMetricsSnapshot;
use crate::metrics::traits::MetricsExporter;

/// Prometheus text exporter for adaptive cache snapshots.
///
/// Writes the text exposition format so the output can be scraped by
/// Prometheus or forwarded to an OpenTelemetry collector. Write errors are
/// dropped; metrics never fail the caller.
#[derive(Debug)]
pub struct PrometheusTextExporter<W: Write + Send> {
    prefix: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> PrometheusTextExporter<W> {
    pub fn new(prefix: impl Into<String>, writer: W) -> Self {
        Self {
            prefix: prefix.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the exporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn metric_name(&self, suffix: &str) -> String {
        if self.prefix.is_empty() {
            suffix.to_string()
        } else {
            format!("{}_{}", self.prefix, suffix)
        }
    }

    fn write_sample(writer: &mut W, kind: &str, name: &str, value: u64) {
        let _ = writeln!(writer, "# TYPE {} {}", name, kind);
        let _ = writeln!(writer, "{} {}", name, value);
    }
}

impl<W: Write + Send> MetricsExporter<AdaptiveMetricsSnapshot> for PrometheusTextExporter<W> {
    fn export(&self, snapshot: &AdaptiveMetricsSnapshot) {
        let counters = [
            ("get_calls_total", snapshot.get_calls),
            ("get_hits_total", snapshot.get_hits),
            ("get_misses_total", snapshot.get_misses),
            ("insert_calls_total", snapshot.insert_calls),
            ("insert_updates_total", snapshot.insert_updates),
            ("insert_new_total", snapshot.insert_new),
            ("evict_calls_total", snapshot.evict_calls),
            ("evicted_entries_total", snapshot.evicted_entries),
            ("clears_total", snapshot.clears),
            ("promotions_total", snapshot.promotions),
            ("recency_ghost_hits_total", snapshot.recency_ghost_hits),
            ("frequency_ghost_hits_total", snapshot.frequency_ghost_hits),
            ("split_increases_total", snapshot.split_increases),
            ("split_decreases_total", snapshot.split_decreases),
            ("recency_evictions_total", snapshot.recency_evictions),
            ("frequency_evictions_total", snapshot.frequency_evictions),
            ("ghosts_forgotten_total", snapshot.ghosts_forgotten),
        ];
        let gauges = [
            ("cache_len", snapshot.cache_len),
            ("capacity", snapshot.capacity),
            ("split", snapshot.split),
            ("recency_len", snapshot.recency_len),
            ("frequency_len", snapshot.frequency_len),
            ("recency_ghost_len", snapshot.recency_ghost_len),
            ("frequency_ghost_len", snapshot.frequency_ghost_len),
        ];

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        for (suffix, value) in counters {
            Self::write_sample(&mut writer, "counter", &self.metric_name(suffix), value);
        }
        for (suffix, value) in gauges {
            Self::write_sample(&mut writer, "gauge", &self.metric_name(suffix), value as u64);
        }
    }
}
