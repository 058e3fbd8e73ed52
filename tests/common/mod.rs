// Test helpers are intentionally partially used
#![allow(dead_code)]

use message_metrics::domain::{MessageCatalog, RandomPtr, ThreadRandom, TokioClock};
use message_metrics::{
    build_application_with, AppConfig, Application, CatalogConfig, Dependencies, InMemoryMetrics,
    MetricsBackend,
};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::time::sleep;

// ============================================================================
// Test Setup
// ============================================================================

/// Configuration with the given catalog and metrics backend and the sampler
/// job disabled.
pub fn test_config(messages: &[&str], backend: MetricsBackend) -> AppConfig {
    // ---
    let mut config = AppConfig::default();
    config.metrics.backend = backend;
    config.catalog = CatalogConfig {
        catalog: MessageCatalog::new(messages.iter().copied()).expect("non-empty catalog"),
    };
    config.sampler.enabled = false;
    config
}

/// Builds an application over in-memory metrics so tests can inspect them.
pub fn memory_app(messages: &[&str], random: RandomPtr) -> (Application, Arc<InMemoryMetrics>) {
    // ---
    let metrics = Arc::new(InMemoryMetrics::new());
    let deps = Dependencies {
        metrics: metrics.clone(),
        random,
        clock: Arc::new(TokioClock),
    };
    let config = test_config(messages, MetricsBackend::Memory);

    (build_application_with(&config, deps), metrics)
}

pub fn default_memory_app() -> (Application, Arc<InMemoryMetrics>) {
    memory_app(
        &message_metrics::domain::DEFAULT_MESSAGES,
        Arc::new(ThreadRandom),
    )
}

pub struct TestServer {
    pub addr: std::net::SocketAddr,
    pub client: Client,
}

impl TestServer {
    // ---
    pub async fn new(app: &Application) -> Self {
        // --

        let router = app.router();
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // Spawn the server in the background
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        // Give the server a moment to start
        sleep(Duration::from_millis(100)).await;

        let client = Client::new();

        Self { addr, client }
    }

    pub fn url(&self, path: &str) -> String {
        // ---
        format!("http://{}{}", self.addr, path)
    }
}

/// Reads the value of an unlabeled metric line (`name value`) from a
/// text exposition body.
pub fn metric_value(body: &str, name: &str) -> Option<f64> {
    // ---
    body.lines()
        .filter(|line| !line.starts_with('#'))
        .find_map(|line| {
            let (key, value) = line.rsplit_once(' ')?;
            if key == name {
                value.parse().ok()
            } else {
                None
            }
        })
}
