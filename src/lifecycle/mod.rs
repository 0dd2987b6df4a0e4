//! Runtime orchestration: starting the collections, serving HTTP and shutting down.
//!
//! # Main Components
//!
//! - [`RegistrySystem`] - owns the collection actors and their clients
//! - [`run`] - binds the listener and serves until Ctrl+C
//! - [`setup_tracing`] - initializes the logging infrastructure

pub mod registry_system;
pub mod tracing;

pub use registry_system::*;
pub use self::tracing::*;

use crate::config::ServiceConfig;
use crate::error::RegistryError;
use crate::http::{self, AppState};
use tokio::net::TcpListener;

/// Serves the registry on `config.bind` until Ctrl+C, then shuts the collections down.
pub async fn run(config: ServiceConfig) -> Result<(), RegistryError> {
    let system = RegistrySystem::with_buffer_size(config.buffer_size);
    let app = http::build_app(AppState::from_system(&system));

    let listener = TcpListener::bind(config.bind).await?;
    ::tracing::info!(addr = %listener.local_addr()?, "Listening");

    http::serve(listener, app, shutdown_signal()).await?;

    system.shutdown().await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        ::tracing::error!("Failed to listen for Ctrl+C: {e}");
    }
    ::tracing::info!("Shutdown requested");
}
