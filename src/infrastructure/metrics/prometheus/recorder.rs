use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusRecorder};

/// Quantiles rendered for summaries; `1.0` reports the maximum.
const SUMMARY_QUANTILES: &[f64] = &[0.5, 0.9, 0.99, 1.0];

/// Build a Prometheus recorder owned by the caller.
///
/// The recorder is not installed globally, so several instances (one per
/// test, for example) can coexist in a single process.
pub fn build_recorder() -> anyhow::Result<PrometheusRecorder> {
    let recorder = PrometheusBuilder::new()
        .set_quantiles(SUMMARY_QUANTILES)?
        .build_recorder();

    Ok(recorder)
}
