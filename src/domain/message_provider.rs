//! Random message selection with access instrumentation.

use super::catalog::MessageCatalog;
use super::metrics::MetricsPtr;
use super::random::RandomPtr;

/// Serves random messages from an immutable catalog.
///
/// Every call bumps the served counter and overwrites the last-message-length
/// gauge. The catalog size gauge is published once at construction since the
/// catalog never changes afterwards.
pub struct MessageProvider {
    catalog: MessageCatalog,
    metrics: MetricsPtr,
    random: RandomPtr,
}

impl MessageProvider {
    // ---
    pub fn new(catalog: MessageCatalog, metrics: MetricsPtr, random: RandomPtr) -> Self {
        // ---
        metrics.record_catalog_size(catalog.len());
        tracing::info!(catalog_size = catalog.len(), "Creating message provider");

        Self {
            catalog,
            metrics,
            random,
        }
    }

    /// Returns one catalog entry chosen uniformly at random.
    pub fn get_message(&self) -> String {
        // ---
        let message = self.catalog.choose(self.random.as_ref());

        // Length in characters, not bytes.
        self.metrics.record_message_served(message.chars().count());

        message.to_string()
    }
}
