//! Shared types for the Small Sam services
//!
//! Contains only the pieces every service binary needs: the service
//! identity type, tracing initialization, and the common error type.
//! Service-internal types stay in their respective crates.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
