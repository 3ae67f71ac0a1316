//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per process
//! - Derive the default filter from configuration
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` wins over the configured level
//! - The listener's startup line is always enabled, whatever the level

use tracing_subscriber::{
    filter::Directive, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use crate::config::ObservabilityConfig;

/// Target of the `Host listening on port <port>` event.
const STARTUP_DIRECTIVE: &str = "hash_host::net::listener=info";

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(config: &ObservabilityConfig) -> String {
    format!(
        "hash_host={level},tower_http={level}",
        level = config.log_level
    )
}

/// Build the filter from a `RUST_LOG` value (if any) and the config.
///
/// Invalid `RUST_LOG` values fall back to the configured level.
pub fn build_filter(rust_log: Option<&str>, config: &ObservabilityConfig) -> EnvFilter {
    let filter = rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_filter(config)));

    match STARTUP_DIRECTIVE.parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(config: &ObservabilityConfig) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    let _ = tracing_subscriber::registry()
        .with(build_filter(rust_log.as_deref(), config))
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListenerConfig;
    use crate::net::Listener;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    async fn startup_output(rust_log: Option<&str>, log_level: &str, port: u16) -> String {
        let config = ObservabilityConfig {
            log_level: log_level.into(),
            ..ObservabilityConfig::default()
        };
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::registry()
            .with(build_filter(rust_log, &config))
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(move || writer.clone())
                    .with_ansi(false)
                    .without_time(),
            );
        let _guard = tracing::subscriber::set_default(subscriber);

        let _listener = Listener::bind(&ListenerConfig {
            host: "127.0.0.1".into(),
            port,
        })
        .await
        .unwrap();

        let bytes = captured.0.lock().unwrap().clone();
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_default_filter_uses_level() {
        let config = ObservabilityConfig {
            log_level: "debug".into(),
            ..ObservabilityConfig::default()
        };
        assert_eq!(default_filter(&config), "hash_host=debug,tower_http=debug");
    }

    #[tokio::test]
    async fn test_startup_line_survives_quiet_level() {
        let output = startup_output(None, "warn", 28491).await;
        assert!(output.contains("Host listening on port 28491"), "{output:?}");
    }

    #[tokio::test]
    async fn test_startup_line_survives_unrelated_rust_log() {
        let output = startup_output(Some("tower_http=debug"), "info", 28492).await;
        assert!(output.contains("Host listening on port 28492"), "{output:?}");
    }
}
