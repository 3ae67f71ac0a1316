//! hash-host
//!
//! A small HTTP host built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────────────┐
//!                        │                  HASH HOST                   │
//!                        │                                              │
//!     Client Request     │  ┌─────────┐   ┌──────────┐   ┌──────────┐   │
//!     ───────────────────┼─▶│   net   │──▶│   http   │──▶│ routing  │   │
//!                        │  │listener │   │ cors/id/ │   │  /hash   │   │
//!                        │  └─────────┘   │ trace    │   │  or 404  │   │
//!                        │                └──────────┘   └──────────┘   │
//!                        │                                              │
//!                        │  ┌────────────────────────────────────────┐  │
//!                        │  │         Cross-Cutting Concerns         │  │
//!                        │  │  config  │  lifecycle  │ observability │  │
//!                        │  └────────────────────────────────────────┘  │
//!                        └──────────────────────────────────────────────┘
//! ```
//!
//! The listen port comes from `PORT` (default 5001); `--port` overrides it.

use std::path::PathBuf;

use clap::Parser;

use hash_host::config::{resolve_config, PORT_ENV};
use hash_host::lifecycle::{self, signals, Shutdown};
use hash_host::observability::logging;
use hash_host::routing::RouteTable;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Optional TOML configuration file
    #[arg(short, long, env = "HASH_HOST_CONFIG")]
    config: Option<PathBuf>,

    /// Listen port; takes precedence over PORT
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let env_port = std::env::var_os(PORT_ENV).map(|v| v.to_string_lossy().into_owned());
    let config = resolve_config(args.config.as_deref(), env_port.as_deref(), args.port)?;

    logging::init(&config.observability);

    tracing::info!("hash-host v{} starting", env!("CARGO_PKG_VERSION"));

    let shutdown = Shutdown::new();
    signals::spawn_signal_listener(shutdown.clone());

    lifecycle::start(config, RouteTable::with_defaults(), &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
