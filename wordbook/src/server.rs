//! The HTTP server.

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::Error;
use crate::config::ServerConfig;
use crate::routes::{AppState, router};

/// Serves the application on the configured address until interrupted with Ctrl-C.
///
/// # Errors
///
/// - [`Error::Bind`] - if the listening socket cannot be bound.
/// - [`Error::Serve`] - if accepting connections fails.
pub async fn serve(config: &ServerConfig, state: AppState) -> Result<(), Error> {
    let addr = config.listen;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| Error::Bind { addr, source })?;

    info!(%addr, "listening for http requests");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::Serve)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "could not listen for shutdown signal");
        std::future::pending::<()>().await;
    }

    info!("shutting down");
}
