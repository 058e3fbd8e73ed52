//! Prometheus metrics implementation.
//!
//! This module provides a concrete implementation of the `Metrics` trait using
//! the Prometheus text format. It owns a recorder built in `recorder.rs` and
//! the metric handles registered on it in `meters.rs`.
//!
//! Nothing is installed into the global `metrics` registry: each instance
//! renders only what was recorded through its own handles. Dotted metric
//! names are rendered with underscores by the exporter.

use super::{build_recorder, MessageMeters};
use crate::domain::Metrics;
use metrics_exporter_prometheus::PrometheusHandle;
use std::time::Duration;

/// Prometheus-based metrics implementation.
pub struct PrometheusMetrics {
    handle: PrometheusHandle,
    meters: MessageMeters,
}

impl PrometheusMetrics {
    pub fn new() -> anyhow::Result<Self> {
        // ---
        tracing::info!("Creating Prometheus metrics");
        let recorder = build_recorder()?;
        let meters = MessageMeters::register(&recorder);

        Ok(PrometheusMetrics {
            handle: recorder.handle(),
            meters,
        })
    }
}

impl Metrics for PrometheusMetrics {
    fn render(&self) -> String {
        self.handle.render()
    }

    fn record_message_served(&self, length: usize) {
        tracing::debug!(length, "Recording message served event");
        self.meters.served.increment(1);
        self.meters.last_message_length.set(length as f64);
    }

    fn record_catalog_size(&self, size: usize) {
        self.meters.catalog_size.set(size as f64);
    }

    fn record_operation_started(&self) {
        tracing::debug!("Recording long operation start");
        self.meters.operations.increment(1);
    }

    fn record_operation_duration(&self, elapsed: Duration) {
        tracing::debug!("Recording long operation duration");
        self.meters.operation_timer.record(elapsed);
    }
}
