//! Simulated long-running operation with timer instrumentation.

use super::clock::ClockPtr;
use super::metrics::MetricsPtr;
use super::random::RandomPtr;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Default exclusive upper bound on the simulated work duration.
pub const DEFAULT_MAX_JITTER: Duration = Duration::from_millis(7_000);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SamplerError {
    #[error("long operation cancelled before completion")]
    Cancelled,
}

/// Simulates variable-latency work and records how long it took.
pub struct PeriodicSampler {
    metrics: MetricsPtr,
    random: RandomPtr,
    clock: ClockPtr,
    max_jitter: Duration,
}

impl PeriodicSampler {
    // ---
    pub fn new(
        metrics: MetricsPtr,
        random: RandomPtr,
        clock: ClockPtr,
        max_jitter: Duration,
    ) -> Self {
        // ---
        Self {
            metrics,
            random,
            clock,
            max_jitter,
        }
    }

    pub fn max_jitter(&self) -> Duration {
        self.max_jitter
    }

    /// Runs one simulated operation.
    ///
    /// The operation counter is bumped before any work starts. The task then
    /// sleeps for a random duration in `[0, max_jitter)` and records the
    /// measured elapsed time into the operation timer.
    ///
    /// # Errors
    /// Returns [`SamplerError::Cancelled`] if `cancel` fires before the sleep
    /// completes. The counter increment is kept; no timer sample is recorded.
    pub async fn run(&self, cancel: &CancellationToken) -> Result<Duration, SamplerError> {
        // ---
        self.metrics.record_operation_started();

        let start = self.clock.now();
        let work = Duration::from_millis(self.random.next_below(self.max_jitter.as_millis() as u64));
        tracing::debug!(work_ms = work.as_millis() as u64, "Starting long operation");

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                tracing::debug!("Long operation cancelled");
                return Err(SamplerError::Cancelled);
            }
            _ = tokio::time::sleep(work) => {}
        }

        let elapsed = self.clock.now().saturating_duration_since(start);
        self.metrics.record_operation_duration(elapsed);

        Ok(elapsed)
    }
}
