//! In-memory metrics implementation.
//!
//! Every metric is a single atomic so concurrent handlers and the sampler
//! task can record without locking. `Ordering::Relaxed` is enough because no
//! reader relies on ordering between different fields.

use crate::domain::{
    Metrics, LAST_MESSAGE_LENGTH, MESSAGE_COUNTER, MESSAGE_SIZE, OPERATION_COUNTER,
    OPERATION_TIMER,
};
use std::fmt::Write as _;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Point-in-time copy of the operation timer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub count: u64,
    pub total: Duration,
    pub max: Duration,
}

/// Point-in-time copy of every metric value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub messages_served: u64,
    pub last_message_length: u64,
    pub catalog_size: u64,
    pub operations_started: u64,
    pub operation_timer: TimerSnapshot,
}

/// Atomic, process-local metrics backend.
#[derive(Debug, Default)]
pub struct InMemoryMetrics {
    messages_served: AtomicU64,
    last_message_length: AtomicU64,
    catalog_size: AtomicU64,
    operations_started: AtomicU64,
    timer_count: AtomicU64,
    timer_total_nanos: AtomicU64,
    timer_max_nanos: AtomicU64,
}

impl InMemoryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        // ---
        MetricsSnapshot {
            messages_served: self.messages_served.load(Ordering::Relaxed),
            last_message_length: self.last_message_length.load(Ordering::Relaxed),
            catalog_size: self.catalog_size.load(Ordering::Relaxed),
            operations_started: self.operations_started.load(Ordering::Relaxed),
            operation_timer: TimerSnapshot {
                count: self.timer_count.load(Ordering::Relaxed),
                total: Duration::from_nanos(self.timer_total_nanos.load(Ordering::Relaxed)),
                max: Duration::from_nanos(self.timer_max_nanos.load(Ordering::Relaxed)),
            },
        }
    }
}

fn saturating_nanos(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX)
}

impl Metrics for InMemoryMetrics {
    fn render(&self) -> String {
        // ---
        let snapshot = self.snapshot();
        let timer = snapshot.operation_timer;
        let mut out = String::new();

        // Writing to a String cannot fail.
        let _ = writeln!(out, "{MESSAGE_COUNTER} {}", snapshot.messages_served);
        let _ = writeln!(out, "{OPERATION_COUNTER} {}", snapshot.operations_started);
        let _ = writeln!(out, "{LAST_MESSAGE_LENGTH} {}", snapshot.last_message_length);
        let _ = writeln!(out, "{MESSAGE_SIZE} {}", snapshot.catalog_size);
        let _ = writeln!(out, "{OPERATION_TIMER}.count {}", timer.count);
        let _ = writeln!(out, "{OPERATION_TIMER}.total.seconds {}", timer.total.as_secs_f64());
        let _ = writeln!(out, "{OPERATION_TIMER}.max.seconds {}", timer.max.as_secs_f64());

        out
    }

    fn record_message_served(&self, length: usize) {
        tracing::debug!(length, "Recording message served event");
        self.messages_served.fetch_add(1, Ordering::Relaxed);
        self.last_message_length.store(length as u64, Ordering::Relaxed);
    }

    fn record_catalog_size(&self, size: usize) {
        self.catalog_size.store(size as u64, Ordering::Relaxed);
    }

    fn record_operation_started(&self) {
        tracing::debug!("Recording long operation start");
        self.operations_started.fetch_add(1, Ordering::Relaxed);
    }

    fn record_operation_duration(&self, elapsed: Duration) {
        // ---
        tracing::debug!(elapsed_ns = elapsed.as_nanos() as u64, "Recording long operation duration");
        let nanos = saturating_nanos(elapsed);
        self.timer_count.fetch_add(1, Ordering::Relaxed);
        self.timer_total_nanos.fetch_add(nanos, Ordering::Relaxed);
        self.timer_max_nanos.fetch_max(nanos, Ordering::Relaxed);
    }
}
