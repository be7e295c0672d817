//! Shared logging utilities for consistent tracing across all services

use crate::types::ServiceId;

/// Initialize the tracing subscriber with service-specific filtering.
///
/// Falls back to `info` when no level is given. `RUST_LOG` is not
/// consulted; each binary passes its `--log-level` flag here.
pub fn init_tracing(service: ServiceId, log_level: Option<&str>) {
    use tracing_subscriber::{fmt, EnvFilter};

    let base_level = log_level.unwrap_or("info");

    let env_filter = match service {
        ServiceId::AgentFramework => {
            format!("agent_framework={base_level},shared={base_level},tower=warn,hyper=warn")
        }
        ServiceId::Backend => {
            format!("backend={base_level},shared={base_level},tower_http={base_level},hyper=warn")
        }
        ServiceId::DataOrchestration => {
            format!("data_orchestration={base_level},shared={base_level},redis=warn,hyper=warn")
        }
    };

    fmt()
        .with_env_filter(EnvFilter::new(&env_filter))
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}
