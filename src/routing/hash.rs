//! The `/hash` route group.
//!
//! Hashing itself lives in a separately deployed handler group. Until one is
//! mounted in its place, every request under the prefix is answered with
//! `501 Not Implemented` so clients can tell "no handler" from "no route".

use axum::{
    extract::OriginalUri,
    http::{Method, StatusCode},
    response::IntoResponse,
    Json, Router,
};
use serde::Serialize;

/// Prefix the hash group is mounted under.
pub const HASH_PREFIX: &str = "/hash";

/// JSON body returned while no hash handler is mounted.
#[derive(Debug, Serialize)]
pub struct NotMounted {
    pub error: &'static str,
    pub method: String,
    pub path: String,
}

/// Router answering every request under the prefix.
pub fn router() -> Router {
    Router::new().fallback(not_mounted)
}

async fn not_mounted(method: Method, OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    tracing::debug!(method = %method, path = %uri.path(), "No hash handler mounted");
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(NotMounted {
            error: "hash handler not mounted",
            method: method.to_string(),
            path: uri.path().to_string(),
        }),
    )
}
