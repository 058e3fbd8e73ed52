//! Fixed-delay scheduling for the periodic sampler.
//!
//! The next run starts a fixed delay after the previous one completes, so a
//! slow run pushes every later run back. The first run starts immediately.

use crate::domain::{PeriodicSampler, SamplerError};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

// ---

/// Spawns the sampler loop on its own task.
///
/// The returned handle resolves to the number of runs that completed and
/// recorded a timer sample, once `cancel` fires.
pub fn spawn_fixed_delay(
    sampler: Arc<PeriodicSampler>,
    delay: Duration,
    cancel: CancellationToken,
) -> JoinHandle<u64> {
    // ---
    tokio::spawn(async move { run_fixed_delay(&sampler, delay, &cancel).await })
}

/// Invokes `sampler.run()` repeatedly with fixed-delay semantics until
/// `cancel` fires, either during a run or during the delay between runs.
pub async fn run_fixed_delay(
    sampler: &PeriodicSampler,
    delay: Duration,
    cancel: &CancellationToken,
) -> u64 {
    // ---
    tracing::info!(
        delay_ms = delay.as_millis() as u64,
        max_jitter_ms = sampler.max_jitter().as_millis() as u64,
        "Starting long operation job"
    );

    let mut completed = 0;
    loop {
        match sampler.run(cancel).await {
            Ok(elapsed) => {
                completed += 1;
                tracing::debug!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    completed,
                    "Long operation completed"
                );
            }
            Err(SamplerError::Cancelled) => break,
        }

        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(delay) => {}
        }
    }

    tracing::info!(completed, "Long operation job stopped");
    completed
}
