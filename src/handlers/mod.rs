// Gateway module - controls public API for handlers
// Modules are private, only exported symbols are public

mod health;
mod message;
mod metrics;
mod root;

// Core handlers
pub use health::health_check;
pub use message::get_message;
pub use metrics::metrics_handler;
pub use root::root_handler;
