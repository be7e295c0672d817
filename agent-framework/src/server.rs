//! Agent framework HTTP server
//!
//! Builds the Axum router and runs the HTTP listener until a shutdown
//! signal arrives.

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;

use crate::error::{AgentError, AgentResult};
use shared::ServiceId;

const SERVICE: ServiceId = ServiceId::AgentFramework;

/// Agent framework HTTP service
pub struct AgentService {
    bind_address: SocketAddr,
}

impl AgentService {
    pub fn new(bind_address: SocketAddr) -> Self {
        Self { bind_address }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/", get(root))
            .route("/health", get(health_check))
    }

    /// Start the HTTP server and block until shutdown
    pub async fn run(&self) -> AgentResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(self.bind_address)
            .await
            .map_err(|e| {
                AgentError::ServerStartup(format!("Failed to bind to {}: {}", self.bind_address, e))
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
