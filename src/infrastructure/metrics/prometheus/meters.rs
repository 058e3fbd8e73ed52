use crate::domain::{
    LAST_MESSAGE_LENGTH, MESSAGE_COUNTER, MESSAGE_SIZE, OPERATION_COUNTER, OPERATION_TIMER,
};
use metrics::{
    counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram, Counter,
    Gauge, Histogram, Recorder, Unit,
};

/// Metric handles registered against a specific recorder.
pub struct MessageMeters {
    pub served: Counter,
    pub last_message_length: Gauge,
    pub catalog_size: Gauge,
    pub operations: Counter,
    pub operation_timer: Histogram,
}

impl MessageMeters {
    /// Describe and register every service metric on `recorder`.
    pub fn register(recorder: &dyn Recorder) -> Self {
        // ---
        metrics::with_local_recorder(recorder, || {
            describe_counter!(MESSAGE_COUNTER, "Number of messages served");
            describe_counter!(OPERATION_COUNTER, "Number of long operations started");
            describe_gauge!(
                LAST_MESSAGE_LENGTH,
                "Length in characters of the last message served"
            );
            describe_gauge!(MESSAGE_SIZE, "Number of messages in the catalog");
            describe_histogram!(
                OPERATION_TIMER,
                Unit::Seconds,
                "Duration of completed long operations"
            );

            Self {
                served: counter!(MESSAGE_COUNTER),
                last_message_length: gauge!(LAST_MESSAGE_LENGTH),
                catalog_size: gauge!(MESSAGE_SIZE),
                operations: counter!(OPERATION_COUNTER),
                operation_timer: histogram!(OPERATION_TIMER),
            }
        })
    }
}
