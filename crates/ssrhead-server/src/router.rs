//! Axum router wiring.
//!
//! Static routes win over the catch-all, so every other GET renders the
//! document shell.

use axum::{routing::get, Router};

use crate::{app_state::AppState, ops, page};

pub const HEALTHZ_PATH: &str = "/healthz";
pub const HEAD_API_PATH: &str = "/api/head";

/// Paths that never render the document, so routes cannot configure them.
pub const RESERVED_PATHS: [&str; 2] = [HEALTHZ_PATH, HEAD_API_PATH];

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(HEALTHZ_PATH, get(ops::healthz))
        .route(HEAD_API_PATH, get(page::head_json))
        .route("/", get(page::document))
        .route("/*path", get(page::document))
        .with_state(state)
}
