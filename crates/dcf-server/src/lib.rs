//! # DCF Server
//!
//! HTTP front-end for the DCF valuation engine.
//!
//! ## Features
//!
//! - HTML form with a step-by-step report; raw input is echoed back on errors
//! - JSON API for programmatic valuations
//! - Health endpoint
//! - Configuration via TOML file
//!
//! ## Usage
//!
//! ```ignore
//! use dcf_server::{Server, ServerConfig};
//!
//! let server = Server::new(ServerConfig::default());
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod views;

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::ServerConfig;
pub use error::{ApiError, ApiResult};

/// The DCF server.
pub struct Server {
    config: Arc<ServerConfig>,
}

impl Server {
    /// Create a new server.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router(self.config.clone())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Start the server and run until Ctrl-C.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr).await?;

        info!("DCF server listening on http://{}/", addr);
        info!("  GET  /");
        info!("  POST /compute");
        info!("  GET  /api/v1/valuation");
        info!("  POST /api/v1/valuation");
        info!("  GET  /health");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

/// Shutdown signal handler.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down...");
}
