use anyhow::{Context, Result};
use tokio::signal;
use tracing::info;

/// Resolve once SIGINT (Ctrl+C) or SIGTERM arrives.
///
/// # Errors
/// Returns an error if a signal handler cannot be installed.
pub async fn wait_for_shutdown() -> Result<()> {
    let received = tokio::select! {
        result = interrupt() => result?,
        result = terminate() => result?,
    };

    info!(signal = received, "Shutdown signal received, draining in-flight requests");
    Ok(())
}

async fn interrupt() -> Result<&'static str> {
    signal::ctrl_c()
        .await
        .context("failed to listen for Ctrl+C")?;
    Ok("SIGINT")
}

#[cfg(unix)]
async fn terminate() -> Result<&'static str> {
    signal::unix::signal(signal::unix::SignalKind::terminate())
        .context("failed to install SIGTERM handler")?
        .recv()
        .await;
    Ok("SIGTERM")
}

#[cfg(not(unix))]
async fn terminate() -> Result<&'static str> {
    std::future::pending().await
}
