use axum::response::IntoResponse;

pub async fn root_handler() -> impl IntoResponse {
    let version = env!("CARGO_PKG_VERSION");
    format!(
        r#"Welcome to the Message API 👋
Version: {version}

Available endpoints:
  - GET /message - Fetch a random message
  - GET /metrics - Metrics for scraping
  - GET /health  - Light health check

A background job simulates a long operation on a fixed delay and records
its duration, so /metrics shows counters, gauges and a timer.
"#
    )
}
