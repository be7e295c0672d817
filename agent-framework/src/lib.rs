//! Agent framework service
//!
//! Multi-agent AI system for FPL analysis. Currently a skeleton exposing
//! only the root banner and health check endpoints; agent execution is
//! not wired up yet.

pub mod error;
pub mod server;

pub use error::{AgentError, AgentResult};
pub use server::AgentService;
