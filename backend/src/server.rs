//! Backend HTTP server
//!
//! Builds the Axum router with the frontend CORS policy applied to all
//! routes and runs the HTTP listener until a shutdown signal arrives.

use axum::{http::HeaderValue, response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use crate::error::{BackendError, BackendResult};
use shared::ServiceId;

const SERVICE: ServiceId = ServiceId::Backend;

/// Backend API HTTP service
pub struct BackendService {
    bind_address: SocketAddr,
    allowed_origin: HeaderValue,
}

impl BackendService {
    pub fn new(bind_address: SocketAddr, allowed_origin: HeaderValue) -> Self {
        Self {
            bind_address,
            allowed_origin,
        }
    }

    /// CORS policy for the browser frontend.
    ///
    /// Credentialed CORS forbids wildcard methods and headers, so both
    /// mirror whatever the browser requests. The allow-origin header is
    /// only emitted when the request origin matches the configured one.
    fn cors_layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list([self.allowed_origin.clone()]))
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/", get(root))
            .route("/api/v1/health", get(health_check))
            .layer(ServiceBuilder::new().layer(self.cors_layer()).into_inner())
    }

    /// Start the HTTP server and block until shutdown
    pub async fn run(&self) -> BackendResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(self.bind_address)
            .await
            .map_err(|e| {
                BackendError::ServerStartup(format!(
                    "Failed to bind to {}: {}",
                    self.bind_address, e
                ))
            })?;

        tracing::info!(
            "🌐 {} listening on http://{}",
            SERVICE.display_name(),
            self.bind_address
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("Received shutdown signal");
    }
}

async fn root() -> Json<Value> {
    Json(json!({ "message": SERVICE.display_name() }))
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "healthy", "service": SERVICE.slug() }))
}
