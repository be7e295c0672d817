//! Data orchestration service entry point

use clap::Parser;

use data_orchestration::{OrchestrationResult, OrchestrationService, TaskQueueConfig};
use shared::{logging, ServiceId};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "data-orchestration")]
#[command(about = "Small Sam data orchestration service")]
struct Args {
    /// Host address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for HTTP server
    #[arg(long, default_value = "8002")]
    port: u16,

    /// Task queue broker endpoint
    #[arg(long, default_value = "redis://localhost:6379/2")]
    broker_url: String,

    /// Task queue result-store endpoint
    #[arg(long, default_value = "redis://localhost:6379/3")]
    result_backend_url: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> OrchestrationResult<()> {
    let args = Args::parse();

    logging::init_tracing(ServiceId::DataOrchestration, Some(&args.log_level));

    let bind_address = shared::parse_bind_address(&args.host, args.port)?;

    let queue_config = TaskQueueConfig {
        broker_url: args.broker_url,
        result_backend_url: args.result_backend_url,
    };

    OrchestrationService::new(bind_address, queue_config)?
        .run()
        .await
}
