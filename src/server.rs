//! Listener setup and serving

use tokio::net::TcpListener;

use crate::api::{create_router, AppState};
use crate::error::{Error, Result};

/// Bind a TCP listener on `address` (`host:port`).
pub async fn bind(address: &str) -> Result<TcpListener> {
    TcpListener::bind(address)
        .await
        .map_err(|source| Error::Bind {
            address: address.to_string(),
            source,
        })
}

/// Serve the API on `listener` until the process is killed.
pub async fn run(listener: TcpListener, state: AppState) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "Starting server");

    axum::serve(listener, create_router(state)).await?;

    Ok(())
}
