//! Application state management.
//!
//! This module defines the shared state structure that gets passed to all
//! Axum handlers via the `State` extractor. The `AppState` contains the
//! message provider and the metrics implementation.
//!
//! The state is cheaply cloneable (using `Arc` internally) so it can be
//! passed to each request handler without copying resources.

use crate::domain::{MessageProvider, MetricsPtr};
use std::sync::Arc;

/// Shared application state passed to all Axum handlers.
///
/// This struct serves as the Dependency Injection container for the HTTP
/// layer. It is built once at startup, attached to the router via
/// `.with_state(app_state)`, and cloned by Axum for each request.
///
/// # Fields
///
/// - `provider`: Serves random messages and records access metrics
/// - `metrics`: Metrics implementation rendered by `/metrics`
#[derive(Clone)]
pub(crate) struct AppState {
    /// Message provider shared by all requests.
    provider: Arc<MessageProvider>,

    /// Metrics implementation for rendering.
    ///
    /// The same instance is injected into the provider and the sampler,
    /// so `/metrics` reflects observations from both.
    metrics: MetricsPtr,
}

impl AppState {
    // ---

    pub fn new(provider: Arc<MessageProvider>, metrics: MetricsPtr) -> Self {
        // ---
        AppState { provider, metrics }
    }

    /// Get a reference to the message provider.
    pub(crate) fn provider(&self) -> &MessageProvider {
        // ---
        &self.provider
    }

    /// Get a reference to the metrics implementation.
    pub(crate) fn metrics(&self) -> &MetricsPtr {
        // ---
        &self.metrics
    }
}
