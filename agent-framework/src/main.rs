//! Agent framework service entry point

use clap::Parser;

use agent_framework::{AgentResult, AgentService};
use shared::{logging, ServiceId};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "agent-framework")]
#[command(about = "Small Sam agent framework service")]
struct Args {
    /// Host address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for HTTP server
    #[arg(long, default_value = "8001")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> AgentResult<()> {
    let args = Args::parse();

    logging::init_tracing(ServiceId::AgentFramework, Some(&args.log_level));

    let bind_address = shared::parse_bind_address(&args.host, args.port)?;

    AgentService::new(bind_address).run().await
}
