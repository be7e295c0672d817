//! Data orchestration service
//!
//! Data ingestion and processing service. Currently a skeleton exposing
//! the root banner and health check endpoints; the task queue is declared
//! (broker and result-store endpoints configured at startup) but no task
//! is produced or consumed yet.

pub mod error;
pub mod server;
pub mod task_queue;

pub use error::{OrchestrationError, OrchestrationResult};
pub use server::OrchestrationService;
pub use task_queue::TaskQueueConfig;

#[cfg(feature = "task-queue")]
pub use task_queue::TaskQueueClient;
