use std::sync::Arc;
use tokio::time::Instant;

/// Monotonic time source used to measure operation durations.
///
/// Backed by `tokio::time::Instant` so tests that pause the runtime clock
/// observe deterministic elapsed times.
pub trait Clock: Send + Sync + 'static {
    fn now(&self) -> Instant;
}

/// Type alias for any shared clock.
pub type ClockPtr = Arc<dyn Clock>;

/// Clock reading the tokio runtime's notion of "now".
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioClock;

impl Clock for TokioClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
