//! Backend API service entry point

use axum::http::HeaderValue;
use clap::Parser;

use backend::{BackendError, BackendResult, BackendService};
use shared::{logging, ServiceId};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "backend")]
#[command(about = "Small Sam backend API service")]
struct Args {
    /// Host address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port for HTTP server
    #[arg(long, default_value = "8000")]
    port: u16,

    /// Browser origin allowed to make credentialed requests
    #[arg(long, default_value = "http://localhost:3000")]
    allowed_origin: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> BackendResult<()> {
    let args = Args::parse();

    logging::init_tracing(ServiceId::Backend, Some(&args.log_level));

    let bind_address = shared::parse_bind_address(&args.host, args.port)?;

    let allowed_origin: HeaderValue = args
        .allowed_origin
        .parse()
        .map_err(|e| BackendError::Config(format!("Invalid allowed origin: {}", e)))?;

    BackendService::new(bind_address, allowed_origin).run().await
}
