//! HTTP listener lifecycle.

use crate::{AppState, create_router};
use loresmith_error::{HttpError, LoresmithResult};
use tokio::net::TcpListener;
use tracing::{info, instrument, warn};

/// Serve the API on `addr` until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
#[instrument(skip(state))]
pub async fn serve(addr: &str, state: AppState) -> LoresmithResult<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| HttpError::new(format!("Failed to bind {addr}: {e}")))?;
    info!(addr = %addr, "Loresmith API listening");

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| HttpError::new(format!("Server error: {e}")))?;

    info!("Loresmith API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
