use anyhow::{Context, Result};
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use water_quality_service::{api, config::Config, db::ReadingStore, net};

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; variables may come from the real environment
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;

    let store = ReadingStore::open(&config.database_path)
        .await
        .with_context(|| format!("failed to open store at {}", config.database_path.display()))?;
    info!(path = %config.database_path.display(), "Database ready");

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(
        addr = %addr,
        local_ip = %net::local_ip_address(),
        "HTTP server listening"
    );

    axum::serve(listener, api::router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix, so in-flight requests can finish.
async fn shutdown_signal() {
    #[cfg(unix)]
    let received = {
        let mut sigterm = match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(sigterm) => sigterm,
            Err(e) => {
                warn!(error = %e, "SIGTERM handler unavailable; only Ctrl+C stops the server");
                let _ = signal::ctrl_c().await;
                info!(signal = "SIGINT", "Shutting down");
                return;
            }
        };
        tokio::select! {
            _ = signal::ctrl_c() => "SIGINT",
            _ = sigterm.recv() => "SIGTERM",
        }
    };

    #[cfg(not(unix))]
    let received = {
        let _ = signal::ctrl_c().await;
        "SIGINT"
    };

    info!(signal = received, "Shutting down");
}
