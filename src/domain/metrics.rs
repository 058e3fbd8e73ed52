use std::sync::Arc;
use std::time::Duration;

/// Metric name for the number of messages served.
pub const MESSAGE_COUNTER: &str = "service.message.counter";

/// Metric name for the number of simulated long operations started.
pub const OPERATION_COUNTER: &str = "service.message.long.operation.counter";

/// Metric name for the character length of the last message served.
pub const LAST_MESSAGE_LENGTH: &str = "service.message.last.message.length";

/// Metric name for the size of the message catalog.
pub const MESSAGE_SIZE: &str = "service.message.message.size";

/// Metric name for the duration distribution of simulated long operations.
pub const OPERATION_TIMER: &str = "service.message.long.operation.run.timer";

/// Abstraction for application metrics (counters, gauges, timers).
///
/// Injected into the message provider and the periodic sampler at
/// construction so tests can substitute a backend that captures observations.
pub trait Metrics: Send + Sync + 'static {
    // ---
    /// Render current metrics in the backend's text format.
    fn render(&self) -> String;

    /// Record a "message served" event together with the served message length.
    fn record_message_served(&self, length: usize);

    /// Publish the (constant) size of the message catalog.
    fn record_catalog_size(&self, size: usize);

    /// Record that a long operation has started.
    fn record_operation_started(&self);

    /// Record the elapsed time of a completed long operation.
    fn record_operation_duration(&self, elapsed: Duration);
}

/// Type alias for any backend that implements Metrics.
pub type MetricsPtr = Arc<dyn Metrics>;
