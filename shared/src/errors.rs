//! Shared error types for the Small Sam services

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid listen address: {input}")]
    InvalidAddress { input: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
