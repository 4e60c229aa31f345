//! Payment Service
//!
//! Validates card charges over a JSON RPC endpoint.
//!
//! # Architecture Overview
//!
//! ```text
//!                     ┌──────────────────────────────────────────────┐
//!                     │                PAYMENT SERVICE                │
//!   POST Charge       │  ┌────────┐    ┌───────────────┐   ┌───────┐ │
//!   ──────────────────┼─▶│  http  │───▶│   payments    │──▶│ card  │ │
//!                     │  │ server │    │   handler     │   │ Luhn  │ │
//!                     │  └────────┘    │ (span, event) │   └───────┘ │
//!                     │       ▲        └──────┬────────┘             │
//!   transactionId     │       │               ▼                      │
//!   ◀─────────────────┼───────┴──── Charged | ChargeError            │
//!                     │                                              │
//!                     │  ┌───────────┐ ┌─────────────────────────┐  │
//!                     │  │  config   │ │ observability           │  │
//!                     │  │ TOML+env  │ │ logs / spans / counter  │  │
//!                     │  └───────────┘ └─────────────────────────┘  │
//!                     └──────────────────────────────────────────────┘
//! ```

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use payment_service::config::load_config;
use payment_service::observability::{logging, metrics};
use payment_service::HttpServer;

#[derive(Parser)]
#[command(name = "payment-service")]
#[command(about = "Card charge validation service", long_about = None)]
struct Cli {
    /// Path to a TOML config file.
    #[arg(short, long, env = "PAYMENT_SERVICE_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    logging::init_logging(&config.observability);

    tracing::info!(
        service = %config.observability.service_name,
        bind_address = %config.listener.bind_address,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr)?,
            Err(e) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                error = %e,
                "Failed to parse metrics address"
            ),
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
