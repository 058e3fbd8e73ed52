// src/lib.rs
use anyhow::Result;
use app_state::AppState;
use axum::{routing::get, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use domain::{ClockPtr, MessageProvider, MetricsPtr, PeriodicSampler, RandomPtr};
use domain::{ThreadRandom, TokioClock};
use handlers::{get_message, health_check, metrics_handler, root_handler};

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod app_state;
mod config;
mod handlers;
mod infrastructure;
mod scheduler;

pub use config::*;

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_memory_metrics, // ---
    create_metrics,
    create_noop_metrics,
    create_prom_metrics,
    InMemoryMetrics,
    MetricsSnapshot,
    TimerSnapshot,
};
pub use scheduler::{run_fixed_delay, spawn_fixed_delay};

/// Initialize the global tracing subscriber.
///
/// Honors `RUST_LOG`, defaulting to `info`. Safe to call more than once;
/// later calls are ignored.
pub fn init_tracing() {
    // ---
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(filter).try_init().ok();
}

/// Collaborators injected into the message provider and the sampler.
#[derive(Clone)]
pub struct Dependencies {
    pub metrics: MetricsPtr,
    pub random: RandomPtr,
    pub clock: ClockPtr,
}

impl Dependencies {
    /// Production collaborators: configured metrics backend, thread-local
    /// randomness and the tokio clock.
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        // ---
        Ok(Self {
            metrics: create_metrics(config.metrics.backend)?,
            random: Arc::new(ThreadRandom),
            clock: Arc::new(TokioClock),
        })
    }
}

/// Fully wired service: HTTP router plus the periodic sampler job.
pub struct Application {
    router: Router,
    sampler: Arc<PeriodicSampler>,
    sampler_config: SamplerConfig,
    bind_addr: SocketAddr,
}

impl Application {
    // ---
    /// Router serving `/message`, `/metrics`, `/health` and `/`.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Spawns the fixed-delay sampler job, unless disabled by configuration.
    pub fn spawn_sampler(&self, cancel: CancellationToken) -> Option<JoinHandle<u64>> {
        // ---
        if !self.sampler_config.enabled {
            tracing::info!("Long operation job disabled");
            return None;
        }

        Some(spawn_fixed_delay(
            Arc::clone(&self.sampler),
            self.sampler_config.fixed_delay,
            cancel,
        ))
    }
}

/// Build the application from configuration with production collaborators.
pub fn build_application(config: &AppConfig) -> Result<Application> {
    // ---
    let deps = Dependencies::from_config(config)?;
    Ok(build_application_with(config, deps))
}

/// Build the application from configuration and explicit collaborators.
pub fn build_application_with(config: &AppConfig, deps: Dependencies) -> Application {
    // ---
    let provider = Arc::new(MessageProvider::new(
        config.catalog.catalog.clone(),
        deps.metrics.clone(),
        deps.random.clone(),
    ));

    let sampler = Arc::new(PeriodicSampler::new(
        deps.metrics.clone(),
        deps.random,
        deps.clock,
        config.sampler.max_jitter,
    ));

    let app_state = AppState::new(provider, deps.metrics);

    Application {
        router: build_router(app_state),
        sampler,
        sampler_config: config.sampler.clone(),
        bind_addr: config.server.bind_addr,
    }
}

/// Build the HTTP router with configuration determined by environment variables.
pub fn create_router() -> Result<Router> {
    // ---
    // Load all configuration from environment
    let config = AppConfig::from_env()?;

    init_tracing();

    Ok(build_application(&config)?.router())
}

fn build_router(app_state: AppState) -> Router {
    // ---
    Router::new()
        .route("/", get(root_handler))
        .route("/message", get(get_message))
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .with_state(app_state)
}
