use common::metric_value;
use message_metrics::domain::DEFAULT_MESSAGES;
use message_metrics::{build_application, MetricsBackend};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tokio_util::sync::CancellationToken;

mod common;

// Each test builds its own Prometheus recorder, so nothing here needs to be
// serialized.

#[tokio::test]
async fn metrics_endpoint_with_prometheus() {
    // ---
    let config = common::test_config(&DEFAULT_MESSAGES, MetricsBackend::Prometheus);
    let app = build_application(&config).expect("Should build application");
    let server = common::TestServer::new(&app).await;

    // First, hit some endpoints to generate metrics
    for _ in 0..3 {
        let _ = server
            .client
            .get(server.url("/message"))
            .send()
            .await
            .unwrap();
    }

    let res = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap();

    assert!(
        res.status().is_success(),
        "Metrics endpoint should return success"
    );

    let body = res.text().await.unwrap();
    println!("Metrics response body: '{body}'");

    assert!(body.contains("# TYPE service_message_counter counter"));
    assert_eq!(metric_value(&body, "service_message_counter"), Some(3.0));
    assert!(metric_value(&body, "service_message_last_message_length").is_some());
    assert_eq!(metric_value(&body, "service_message_message_size"), Some(4.0));
    assert_eq!(
        metric_value(&body, "service_message_long_operation_counter"),
        Some(0.0)
    );
}

#[tokio::test]
async fn metrics_endpoint_reports_sampler_timer() {
    // ---
    let mut config = common::test_config(&DEFAULT_MESSAGES, MetricsBackend::Prometheus);
    config.sampler.enabled = true;
    config.sampler.fixed_delay = Duration::from_millis(10);
    config.sampler.max_jitter = Duration::ZERO;

    let app = build_application(&config).expect("Should build application");
    let server = common::TestServer::new(&app).await;

    let cancel = CancellationToken::new();
    let job = app.spawn_sampler(cancel.clone()).expect("sampler enabled");

    sleep(Duration::from_millis(100)).await;
    cancel.cancel();
    let completed = job.await.unwrap();
    assert!(completed >= 1);

    let body = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    // A run interrupted by cancellation is counted but not timed.
    let started = metric_value(&body, "service_message_long_operation_counter").unwrap();
    assert!(started == completed as f64 || started == (completed + 1) as f64);
    assert_eq!(
        metric_value(&body, "service_message_long_operation_run_timer_count"),
        Some(completed as f64)
    );
    assert!(metric_value(&body, "service_message_long_operation_run_timer_sum").is_some());
}

#[tokio::test]
async fn metrics_endpoint_with_noop() {
    // ---
    let config = common::test_config(&DEFAULT_MESSAGES, MetricsBackend::Noop);
    let app = build_application(&config).expect("Should build application");
    let server = common::TestServer::new(&app).await;

    let _ = server
        .client
        .get(server.url("/message"))
        .send()
        .await
        .unwrap();

    let res = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap();

    // Should still return success even with noop metrics
    assert!(
        res.status().is_success(),
        "Metrics endpoint should return success even with noop"
    );

    let body = res.text().await.unwrap();
    assert!(body.is_empty());
}

#[tokio::test]
async fn metrics_endpoint_with_memory_backend() {
    // ---
    let (app, metrics) = common::default_memory_app();
    let server = common::TestServer::new(&app).await;

    let _ = server
        .client
        .get(server.url("/message"))
        .send()
        .await
        .unwrap();

    let body = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    let snapshot = metrics.snapshot();
    assert_eq!(metric_value(&body, "service.message.counter"), Some(1.0));
    assert_eq!(
        metric_value(&body, "service.message.last.message.length"),
        Some(snapshot.last_message_length as f64)
    );
    assert_eq!(metric_value(&body, "service.message.message.size"), Some(4.0));
}

#[tokio::test]
async fn metrics_endpoint_survives_load() {
    // ---
    let config = common::test_config(&DEFAULT_MESSAGES, MetricsBackend::Prometheus);
    let app = build_application(&config).expect("Should build application");
    let server = Arc::new(common::TestServer::new(&app).await);

    // Generate some load
    let futures = (0..20).map(|i| {
        let server = Arc::clone(&server);
        async move {
            let endpoint = match i % 3 {
                0 => "/health",
                1 => "/message",
                _ => "/metrics",
            };
            server.client.get(server.url(endpoint)).send().await
        }
    });

    let responses = futures::future::join_all(futures).await;

    // All requests should succeed
    for (i, response) in responses.into_iter().enumerate() {
        // ---
        let response = response.unwrap_or_else(|_| panic!("Request {i} should succeed"));
        assert!(
            response.status().is_success(),
            "Request {i} should return success"
        );
    }

    let body = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    // i % 3 == 1 for 7 of the 20 requests
    assert_eq!(metric_value(&body, "service_message_counter"), Some(7.0), "{body}");
}

#[tokio::test]
async fn metrics_content_type_is_correct() {
    // ---
    let config = common::test_config(&DEFAULT_MESSAGES, MetricsBackend::Prometheus);
    let app = build_application(&config).expect("Should build application");
    let server = common::TestServer::new(&app).await;

    let res = server
        .client
        .get(server.url("/metrics"))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_success());

    let content_type = res
        .headers()
        .get("content-type")
        .expect("content-type header")
        .to_str()
        .unwrap();

    assert!(
        content_type.starts_with("text/plain"),
        "Content type should be appropriate for metrics: {content_type}"
    );
}
