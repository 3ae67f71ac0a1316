//! Mount table: path prefixes mapped to handler groups.
//!
//! # Responsibilities
//! - Validate mount prefixes before they reach the framework
//! - Keep mounts in registration order
//! - Nest every mount into the application router
//!
//! # Design Decisions
//! - Mounts are composed by registration; anything that is a `Router`
//!   (and therefore a request → response service) can be mounted
//! - Prefix matching is segment-aware: `/hash` owns `/hash` and `/hash/...`
//!   but not `/hashes`
//! - Unmatched paths fall through to the framework's 404

use axum::Router;
use thiserror::Error;

use crate::routing::hash::{self, HASH_PREFIX};

/// Error type for mount registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    /// Prefix is empty, the root, lacks a leading `/`, has a trailing `/`,
    /// or contains path-pattern syntax.
    #[error("invalid mount prefix `{0}`")]
    InvalidPrefix(String),

    /// Prefix already registered.
    #[error("mount prefix `{0}` is already in use")]
    DuplicatePrefix(String),
}

/// A handler group registered under a path prefix.
#[derive(Debug)]
pub struct Mount {
    prefix: String,
    router: Router,
}

impl Mount {
    /// Create a mount, validating the prefix.
    pub fn new(prefix: impl Into<String>, router: Router) -> Result<Self, RouteError> {
        let prefix = prefix.into();
        validate_prefix(&prefix)?;
        Ok(Self { prefix, router })
    }

    /// The path prefix this mount owns.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

fn validate_prefix(prefix: &str) -> Result<(), RouteError> {
    let valid = prefix.len() > 1
        && prefix.starts_with('/')
        && !prefix.ends_with('/')
        && !prefix.contains("//")
        && !prefix.contains(['{', '}', '*', '?', '#', ' ']);

    if valid {
        Ok(())
    } else {
        Err(RouteError::InvalidPrefix(prefix.to_string()))
    }
}

/// Ordered collection of mounts applied to the application router.
#[derive(Debug, Default)]
pub struct RouteTable {
    mounts: Vec<Mount>,
}

impl RouteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with the `/hash` group mounted.
    pub fn with_defaults() -> Self {
        Self {
            mounts: vec![Mount {
                prefix: HASH_PREFIX.to_string(),
                router: hash::router(),
            }],
        }
    }

    /// Register `router` under `prefix`.
    pub fn mount(mut self, prefix: impl Into<String>, router: Router) -> Result<Self, RouteError> {
        let mount = Mount::new(prefix, router)?;
        if self.mounts.iter().any(|m| m.prefix == mount.prefix) {
            return Err(RouteError::DuplicatePrefix(mount.prefix));
        }
        self.mounts.push(mount);
        Ok(self)
    }

    /// Replace the group under an existing prefix, or add it.
    pub fn replace(mut self, prefix: impl Into<String>, router: Router) -> Result<Self, RouteError> {
        let mount = Mount::new(prefix, router)?;
        match self.mounts.iter_mut().find(|m| m.prefix == mount.prefix) {
            Some(existing) => *existing = mount,
            None => self.mounts.push(mount),
        }
        Ok(self)
    }

    /// Mounted prefixes in registration order.
    pub fn prefixes(&self) -> Vec<&str> {
        self.mounts.iter().map(Mount::prefix).collect()
    }

    /// Number of mounts.
    pub fn len(&self) -> usize {
        self.mounts.len()
    }

    /// True when nothing is mounted.
    pub fn is_empty(&self) -> bool {
        self.mounts.is_empty()
    }

    /// Nest every mount into `app`.
    pub fn apply(self, app: Router) -> Router {
        self.mounts.into_iter().fold(app, |app, mount| {
            tracing::debug!(prefix = %mount.prefix, "Mounting route group");
            app.nest_service(&mount.prefix, mount.router)
        })
    }
}
