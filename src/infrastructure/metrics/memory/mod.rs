mod memory_metrics;

pub use memory_metrics::{InMemoryMetrics, MetricsSnapshot, TimerSnapshot};
use std::sync::Arc;

/// Creates a new in-memory metrics implementation.
///
/// Values are kept in process-local atomics and rendered as plain
/// `name value` lines. Useful for tests and for running without a
/// Prometheus scraper.
///
/// Returns a fully initialized metrics instance ready for use.
pub fn create() -> anyhow::Result<crate::domain::MetricsPtr> {
    tracing::info!("Initializing in-memory metrics");
    Ok(Arc::new(InMemoryMetrics::new()))
}
