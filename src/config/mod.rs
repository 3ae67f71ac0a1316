//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! defaults
//!     → config file (TOML, optional)
//!     → PORT environment variable
//!     → --port CLI flag
//!     → validation.rs (semantic checks)
//!     → HostConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; a new port means a new process
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, resolve_config, resolve_port, ConfigError, PORT_ENV};
pub use schema::{
    CorsConfig, HostConfig, ListenerConfig, ObservabilityConfig, TimeoutConfig, DEFAULT_PORT,
};
pub use validation::{validate_config, ValidationError};
