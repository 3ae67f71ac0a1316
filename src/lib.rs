//! HTTP host library: CORS-enabled server mounting the `/hash` route group.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod routing;

pub use config::schema::HostConfig;
pub use http::HostServer;
pub use lifecycle::Shutdown;
pub use routing::RouteTable;
