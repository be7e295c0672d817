//! Orchestration HTTP server
//!
//! Builds the Axum router and runs the HTTP listener until a shutdown
//! signal arrives. The task queue client is constructed at startup but
//! no route touches it.

use axum::{response::Json, routing::get, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;

use crate::error::{OrchestrationError, OrchestrationResult};
use crate::task_queue::TaskQueueConfig;
use shared::ServiceId;

#[cfg(feature = "task-queue")]
use crate::task_queue::TaskQueueClient;

const SERVICE: ServiceId = ServiceId::DataOrchestration;

/// Data orchestration HTTP service
pub struct OrchestrationService {
    bind_address: SocketAddr,
    queue_config: TaskQueueConfig,
    #[cfg(feature = "task-queue")]
    task_queue: TaskQueueClient,
}

impl OrchestrationService {
    /// Create the service, constructing the task queue client handles.
    ///
    /// Fails only on a malformed broker or result-store URL; the broker
    /// does not need to be reachable.
    pub fn new(
        bind_address: SocketAddr,
        queue_config: TaskQueueConfig,
    ) -> OrchestrationResult<Self> {
        #[cfg(feature = "task-queue")]
        let task_queue = TaskQueueClient::new(&queue_config)?;

        Ok(Self {
            bind_address,
            queue_config,
            #[cfg(feature = "task-queue")]
            task_queue,
        })
    }

    /// Task queue client handles (unused by any route)
    #[cfg(feature = "task-queue")]
    pub fn task_queue(&self) -> &TaskQueueClient {
        &self.task_queue
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        Router::new()
            .route("/", get(root))
            .route("/health", get(health_check))
    }

    /// Start the HTTP server and block until shutdown
    pub async fn run(&self) -> OrchestrationResult<()> {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(self.bind_address)
            .await
            .map_err(|e| {
                OrchestrationError::ServerStartup(format!(
                    "Failed to bind to {}: {}",
                    self.bind_address, e
                ))
            })?;

        tracing::info!(
            "🌐 {} listening on http://{}",
            SERVICE.display_name(),
            self.bind_address
        );
        tracing::info!(
            "📮 Task queue configured: broker {} / results {}",
            self.queue_config.broker_url,
            self.queue_config.result_backend_url
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
