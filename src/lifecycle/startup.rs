//! Startup orchestration.
//!
//! # Responsibilities
//! - Start the metrics exporter when enabled
//! - Build the server from validated config and mounts
//! - Bind the listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The listener binds last, so traffic arrives only once the router is ready

use std::net::AddrParseError;

use metrics_exporter_prometheus::BuildError;
use thiserror::Error;

use crate::config::HostConfig;
use crate::http::HostServer;
use crate::lifecycle::Shutdown;
use crate::net::{Listener, ListenerError};
use crate::observability::metrics::init_metrics;
use crate::routing::RouteTable;

/// Anything that stops the host from reaching (or staying in) the
/// listening state.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Listener(#[from] ListenerError),

    #[error("invalid metrics address: {0}")]
    MetricsAddress(#[from] AddrParseError),

    #[error("metrics exporter failed to start: {0}")]
    Metrics(#[from] BuildError),

    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Run the host until `shutdown` is triggered.
pub async fn start(
    config: HostConfig,
    routes: RouteTable,
    shutdown: &Shutdown,
) -> Result<(), StartupError> {
    let shutdown_rx = shutdown.subscribe();

    if config.observability.metrics_enabled {
        init_metrics(config.observability.metrics_address.parse()?)?;
    }

    let server = HostServer::new(config, routes);
    let listener = Listener::bind(&server.config().listener).await?;

    server.run(listener, shutdown_rx).await?;
    Ok(())
}
