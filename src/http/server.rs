//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with every mounted group
//! - Wire up middleware (CORS, request ID, tracing, timeout, metrics)
//! - Serve on a bound listener until shutdown

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware, Router,
};
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::HostConfig;
use crate::http::cors::cors_layer;
use crate::http::request::{propagate_request_id_layer, request_id_of, set_request_id_layer};
use crate::lifecycle::shutdown;
use crate::net::Listener;
use crate::observability::metrics::track_requests;
use crate::routing::RouteTable;

/// The host's application instance.
///
/// Built once by the entry point and consumed by [`HostServer::run`].
pub struct HostServer {
    router: Router,
    config: HostConfig,
    prefixes: Vec<String>,
}

impl HostServer {
    /// Create a new HTTP server with the given configuration and mounts.
    pub fn new(config: HostConfig, routes: RouteTable) -> Self {
        let prefixes = routes.prefixes().into_iter().map(String::from).collect();
        let router = Self::build_router(&config, routes);
        Self {
            router,
            config,
            prefixes,
        }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// CORS and metrics are applied on the router itself, outside the traced
    /// stack, so preflights, 404s and timeouts all carry the cross-origin
    /// headers and are counted with their final status.
    fn build_router(config: &HostConfig, routes: RouteTable) -> Router {
        routes
            .apply(Router::new())
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                        tracing::info_span!(
                            "request",
                            method = %request.method(),
                            path = %request.uri().path(),
                            request_id = %request_id_of(request),
                        )
                    }))
                    .layer(propagate_request_id_layer())
                    .layer(TimeoutLayer::with_status_code(
                        StatusCode::REQUEST_TIMEOUT,
                        Duration::from_secs(config.timeouts.request_secs),
                    )),
            )
            .layer(cors_layer(&config.cors))
            .layer(middleware::from_fn(track_requests))
    }

    /// The composed router, for serving in-process.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &HostConfig {
        &self.config
    }

    /// Mounted prefixes in registration order.
    pub fn prefixes(&self) -> &[String] {
        &self.prefixes
    }

    /// Serve on `listener` until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: Listener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        tracing::debug!(mounts = ?self.prefixes, "HTTP server starting");

        axum::serve(listener.into_inner(), self.router)
            .with_graceful_shutdown(shutdown::wait(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
