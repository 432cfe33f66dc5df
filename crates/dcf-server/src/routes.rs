//! Route definitions.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;

use crate::config::ServerConfig;
use crate::handlers;

/// Create the router.
///
/// # Arguments
/// * `config` - Server configuration; only `static_dir` is read here
pub fn create_router(config: Arc<ServerConfig>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health))
        .route("/api/v1/health", get(handlers::health))
        // HTML form
        .route("/", get(handlers::index))
        .route("/compute", post(handlers::compute_form))
        // JSON API
        .route(
            "/api/v1/valuation",
            get(handlers::value_query).post(handlers::value_json),
        )
        // Static assets
        .nest_service("/static", ServeDir::new(&config.static_dir))
}
