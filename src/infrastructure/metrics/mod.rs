pub mod memory;
pub mod noop;
pub mod prometheus;

use crate::config::MetricsBackend;
use crate::domain::MetricsPtr;

// Re-export the factory functions for easy access
pub use memory::create as create_memory_metrics;
pub use memory::{InMemoryMetrics, MetricsSnapshot, TimerSnapshot};
pub use noop::create as create_noop_metrics;
pub use prometheus::create as create_prom_metrics;

/// Creates the metrics implementation selected by configuration.
pub fn create_metrics(backend: MetricsBackend) -> anyhow::Result<MetricsPtr> {
    // ---
    match backend {
        MetricsBackend::Prometheus => create_prom_metrics(),
        MetricsBackend::Memory => create_memory_metrics(),
        MetricsBackend::Noop => create_noop_metrics(),
    }
}
