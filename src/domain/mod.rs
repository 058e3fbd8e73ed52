mod catalog;
mod clock;
mod message_provider;
mod metrics;
mod random;
mod sampler;

// Publicly expose the Metrics abstraction and metric names
pub use metrics::{
    Metrics, MetricsPtr, LAST_MESSAGE_LENGTH, MESSAGE_COUNTER, MESSAGE_SIZE, OPERATION_COUNTER,
    OPERATION_TIMER,
};

// Injectable collaborators
pub use clock::{Clock, ClockPtr, TokioClock};
pub use random::{FixedRandom, RandomPtr, RandomSource, ThreadRandom};

// Core components
pub use catalog::{CatalogError, MessageCatalog, DEFAULT_MESSAGES};
pub use message_provider::MessageProvider;
pub use sampler::{PeriodicSampler, SamplerError, DEFAULT_MAX_JITTER};
