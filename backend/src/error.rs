//! Backend service error types

use shared::SharedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error("Shared component error")]
    Shared(#[from] SharedError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type BackendResult<T> = Result<T, BackendError>;
