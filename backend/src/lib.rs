//! Backend API service
//!
//! Fantasy Premier League assistant API. Currently a skeleton exposing the
//! root banner and a versioned health check, with a CORS policy that lets
//! the browser frontend call it with credentials.

pub mod error;
pub mod server;

pub use error::{BackendError, BackendResult};
pub use server::BackendService;
