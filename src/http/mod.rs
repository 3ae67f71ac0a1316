//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → cors.rs (cross-origin headers, preflight)
//!     → request.rs (assign / propagate request ID)
//!     → trace + timeout + metrics layers
//!     → mounted group (routing::RouteTable) or 404
//!     → Send to client
//! ```

pub mod cors;
pub mod request;
pub mod server;

pub use cors::cors_layer;
pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::HostServer;
