//! Integration tests for the orchestration HTTP surface

use data_orchestration::{OrchestrationService, TaskQueueConfig};
use serde_json::json;
use std::net::SocketAddr;

/// Spawn the service on a free local port and return its address
async fn spawn_service() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let service = OrchestrationService::new(addr, TaskQueueConfig::default()).unwrap();
    let router = service.build_router();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    addr
}

#[tokio::test]
async fn root_returns_service_banner() {
    let addr = spawn_service().await;

    let response = reqwest::get(format!("http://{addr}/")).await.unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Small Sam Data Orchestration" }));
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let addr = spawn_service().await;

    let response = reqwest::get(format!("http://{addr}/health")).await.unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({ "status": "healthy", "service": "data-orchestration" })
    );
}

#[tokio::test]
async fn unknown_route_returns_not_found() {
    let addr = spawn_service().await;

    let response = reqwest::get(format!("http://{addr}/tasks")).await.unwrap();

    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn startup_fails_on_malformed_queue_url() {
    let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let config = TaskQueueConfig {
        broker_url: "definitely not a url".to_string(),
        ..TaskQueueConfig::default()
    };

    let result = OrchestrationService::new(addr, config);

    #[cfg(feature = "task-queue")]
    assert!(result.is_err());
    #[cfg(not(feature = "task-queue"))]
    assert!(result.is_ok());
}
