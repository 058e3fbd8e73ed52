use anyhow::Result;
use message_metrics::{build_application, init_tracing, AppConfig};
use tokio_util::sync::CancellationToken;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // ---
    // A missing .env file is fine; the process environment still applies.
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber to log to stdout
    init_tracing();

    // Configuration errors (e.g. an empty catalog) abort startup here.
    let config = AppConfig::from_env()?;
    let app = build_application(&config)?;

    let cancel = CancellationToken::new();
    let job = app.spawn_sampler(cancel.clone());

    let endpoint = app.bind_addr();
    info!("Starting at endpoint:{}", endpoint);
    info!(
        "Starting Message API server v{}...",
        env!("CARGO_PKG_VERSION")
    );

    let listener = tokio::net::TcpListener::bind(endpoint).await?;
    axum::serve(listener, app.router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Stop the sampler; an in-flight run is abandoned without a timer sample.
    cancel.cancel();
    if let Some(job) = job {
        let completed = job.await?;
        info!(completed, "Sampler stopped");
    }

    info!("Message API server stopped");
    Ok(())
}

async fn shutdown_signal() {
    // ---
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Signal received, starting graceful shutdown");
}
