//! Orchestration service error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OrchestrationError {
    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[cfg(feature = "task-queue")]
    #[error("Task queue configuration error: {0}")]
    TaskQueue(#[from] redis::RedisError),

    #[error("Shared component error")]
    Shared(#[from] SharedError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type OrchestrationResult<T> = Result<T, OrchestrationError>;
