//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Startup:
//!     RouteTable::with_defaults()
//!     → mount(prefix, router) for extra groups
//!     → apply(app) nests each group under its prefix
//!
//! Per request:
//!     /hash, /hash/...  → hash group (hash.rs)
//!     anything else     → framework 404
//! ```
//!
//! # Design Decisions
//! - Mounts are validated and frozen at startup
//! - Groups are composed, not subclassed: any `Router` can be mounted

pub mod hash;
pub mod table;

pub use hash::HASH_PREFIX;
pub use table::{Mount, RouteError, RouteTable};
