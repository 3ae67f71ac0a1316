//! TCP listener binding.
//!
//! # Responsibilities
//! - Parse and bind the configured address
//! - Announce the listening port once bound
//! - Hand the socket to the HTTP layer
//!
//! # Design Decisions
//! - Owning a `Listener` is the "listening" state; there is no way back to
//!   "not listening" other than dropping it
//! - Bind failures are returned, never retried

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ListenerConfig;

/// Error type for listener operations.
#[derive(Debug, Error)]
pub enum ListenerError {
    /// Configured address does not parse.
    #[error("invalid bind address `{addr}`: {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Failed to bind to address.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },
}

/// A bound TCP listener.
#[derive(Debug)]
pub struct Listener {
    inner: TcpListener,
    local_addr: SocketAddr,
}

impl Listener {
    /// Bind to the configured address.
    ///
    /// Emits the `Host listening on port <port>` line on success.
    pub async fn bind(config: &ListenerConfig) -> Result<Self, ListenerError> {
        let bind_address = config.bind_address();
        let addr: SocketAddr = bind_address
            .parse()
            .map_err(|source| ListenerError::InvalidAddress {
                addr: bind_address,
                source,
            })?;

        let inner = TcpListener::bind(addr)
            .await
            .map_err(|source| ListenerError::Bind { addr, source })?;

        let local_addr = inner
            .local_addr()
            .map_err(|source| ListenerError::Bind { addr, source })?;

        tracing::info!("Host listening on port {}", local_addr.port());

        Ok(Self { inner, local_addr })
    }

    /// Get the local address this listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Port actually bound.
    pub fn port(&self) -> u16 {
        self.local_addr.port()
    }

    /// Release the underlying socket to the server.
    pub fn into_inner(self) -> TcpListener {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loopback(port: u16) -> ListenerConfig {
        ListenerConfig {
            host: "127.0.0.1".to_string(),
            port,
        }
    }

    #[tokio::test]
    async fn test_binds_requested_port() {
        let listener = Listener::bind(&loopback(28411)).await.unwrap();
        assert_eq!(listener.port(), 28411);
        assert_eq!(listener.local_addr().to_string(), "127.0.0.1:28411");
    }

    #[tokio::test]
    async fn test_port_in_use_is_bind_error() {
        let _first = Listener::bind(&loopback(28412)).await.unwrap();
        let err = Listener::bind(&loopback(28412)).await.unwrap_err();
        assert!(matches!(err, ListenerError::Bind { addr, .. } if addr.port() == 28412));
    }

    #[tokio::test]
    async fn test_invalid_address() {
        let config = ListenerConfig {
            host: "localhost.invalid".to_string(),
            port: 80,
        };
        let err = Listener::bind(&config).await.unwrap_err();
        assert!(matches!(err, ListenerError::InvalidAddress { .. }));
    }

    #[tokio::test]
    async fn test_release_frees_port() {
        let listener = Listener::bind(&loopback(28413)).await.unwrap();
        drop(listener.into_inner());
        assert!(Listener::bind(&loopback(28413)).await.is_ok());
    }
}
