//! Router-level tests for `GET /message`, driven through `tower::ServiceExt`
//! without binding a socket.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use message_metrics::domain::FixedRandom;
use std::sync::Arc;
use tower::ServiceExt;

mod common;

async fn get(router: axum::Router, uri: &str) -> (StatusCode, String) {
    // ---
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn message_uses_injected_random_source() {
    // ---
    let (app, metrics) = common::memory_app(&["A", "B"], Arc::new(FixedRandom(1)));

    let (status, body) = get(app.router(), "/message").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "B");
    assert_eq!(metrics.snapshot().messages_served, 1);
    assert_eq!(metrics.snapshot().last_message_length, 1);
}

#[tokio::test]
async fn message_counter_counts_every_request() {
    // ---
    let (app, metrics) = common::memory_app(
        &["short", "a much longer message"],
        Arc::new(FixedRandom(1)),
    );

    for _ in 0..5 {
        let (status, body) = get(app.router(), "/message").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "a much longer message");
    }

    let snapshot = metrics.snapshot();
    assert_eq!(snapshot.messages_served, 5);
    assert_eq!(snapshot.last_message_length, 21);
}

#[tokio::test]
async fn message_rejects_other_methods() {
    // ---
    let (app, metrics) = common::default_memory_app();

    let request = Request::builder()
        .method("POST")
        .uri("/message")
        .body(Body::empty())
        .unwrap();
    let response = app.router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(metrics.snapshot().messages_served, 0);
}

#[tokio::test]
async fn health_reports_ok() {
    // ---
    let (app, _metrics) = common::default_memory_app();

    let (status, body) = get(app.router(), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(json["status"], "ok");
}
