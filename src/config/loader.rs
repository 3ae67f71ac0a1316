//! Configuration loading from disk and the environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::HostConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable carrying the listen port.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid PORT value `{0}`: expected an integer between 1 and 65535")]
    InvalidPort(String),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a TOML file without semantic checks.
fn parse_config(path: &Path) -> Result<HostConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<HostConfig, ConfigError> {
    let config = parse_config(path)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply a raw `PORT` value on top of the configured port.
///
/// Unset or blank values leave `current` untouched.
pub fn resolve_port(raw: Option<&str>, current: u16) -> Result<u16, ConfigError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(current);
    };

    match raw.parse::<u16>() {
        Ok(port) if port > 0 => Ok(port),
        _ => Err(ConfigError::InvalidPort(raw.to_string())),
    }
}

/// Resolve the effective configuration.
///
/// Precedence, lowest first: defaults, the TOML file, the `PORT` value,
/// the CLI port. Validation runs once, after every override is applied.
pub fn resolve_config(
    file: Option<&Path>,
    env_port: Option<&str>,
    cli_port: Option<u16>,
) -> Result<HostConfig, ConfigError> {
    let mut config = match file {
        Some(path) => parse_config(path)?,
        None => HostConfig::default(),
    };

    config.listener.port = resolve_port(env_port, config.listener.port)?;
    if let Some(port) = cli_port {
        config.listener.port = port;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
