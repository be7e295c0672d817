//! Service identity used for logging and health payloads

use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::SocketAddr;

use crate::errors::{SharedError, SharedResult};

/// Identifies which of the three Small Sam services a process is running as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceId {
    AgentFramework,
    Backend,
    DataOrchestration,
}

impl ServiceId {
    /// Machine-readable slug, as reported by the health endpoints.
    pub fn slug(&self) -> &'static str {
        match self {
            ServiceId::AgentFramework => "agent-framework",
            ServiceId::Backend => "backend",
            ServiceId::DataOrchestration => "data-orchestration",
        }
    }

    /// Human-readable name, as reported by the root endpoints.
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceId::AgentFramework => "Small Sam Agent Framework",
            ServiceId::Backend => "Small Sam API",
            ServiceId::DataOrchestration => "Small Sam Data Orchestration",
        }
    }
}

/// Combine the `--host` and `--port` flags into a listen address.
pub fn parse_bind_address(host: &str, port: u16) -> SharedResult<SocketAddr> {
    let input = format!("{host}:{port}");
    input
        .parse()
        .map_err(|_| SharedError::InvalidAddress { input })
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_match_health_payloads() {
        assert_eq!(ServiceId::AgentFramework.slug(), "agent-framework");
        assert_eq!(ServiceId::Backend.slug(), "backend");
        assert_eq!(ServiceId::DataOrchestration.slug(), "data-orchestration");
    }

    #[test]
    fn display_names_match_root_payloads() {
        assert_eq!(
            ServiceId::AgentFramework.display_name(),
            "Small Sam Agent Framework"
        );
        assert_eq!(ServiceId::Backend.display_name(), "Small Sam API");
        assert_eq!(
            ServiceId::DataOrchestration.display_name(),
            "Small Sam Data Orchestration"
        );
    }

    #[test]
    fn display_uses_slug() {
        assert_eq!(ServiceId::Backend.to_string(), "backend");
    }

    #[test]
    fn bind_address_combines_host_and_port() {
        let addr = parse_bind_address("127.0.0.1", 8000).unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn bind_address_rejects_garbage_host() {
        assert!(parse_bind_address("not a host", 8000).is_err());
    }
}
