use crate::domain::Metrics;
use std::time::Duration;

/// No-op metrics implementation for testing.
pub struct NoopMetrics;

impl NoopMetrics {
    pub fn new() -> Self {
        NoopMetrics
    }
}

impl Metrics for NoopMetrics {
    // ---
    fn render(&self) -> String {
        String::new()
    }
    fn record_message_served(&self, _: usize) {}
    fn record_catalog_size(&self, _: usize) {}
    fn record_operation_started(&self) {}
    fn record_operation_duration(&self, _: Duration) {}
}
