//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! ListenerConfig (host, port)
//!     → listener.rs (parse, bind, announce port)
//!     → Hand off to HTTP layer (axum::serve)
//! ```
//!
//! # Design Decisions
//! - Exactly one listening socket per process
//! - Connection handling is left to hyper via axum

pub mod listener;

pub use listener::{Listener, ListenerError};
