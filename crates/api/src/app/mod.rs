//! HTTP application wiring (axum router composition).
//!
//! Each chapter of the tour lives in its own file under `routes/` and exposes
//! a `router()`; this module mounts them all under per-chapter prefixes so the
//! whole tour runs as one server. Shared state (the item catalog, the user
//! directory) is injected as extensions, and the process-time middleware wraps
//! everything.

use std::sync::Arc;

use axum::{Extension, Router, routing::get};

use tour_core::{Catalog, UserDirectory};

use crate::middleware;

pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app() -> Router {
    let catalog = Arc::new(Catalog::with_fixtures());
    let users = Arc::new(UserDirectory::new());

    Router::new()
        .route("/", get(routes::hello::root))
        .route("/health", get(routes::hello::health))
        .merge(routes::router())
        .layer(Extension(catalog))
        .layer(Extension(users))
        .layer(axum::middleware::from_fn(middleware::process_time))
}
