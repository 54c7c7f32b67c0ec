//! Kalp airdrop dashboard service.
//!
//! # Architecture Overview
//!
//! ```text
//!   Browser / curl                                             Kalp gateway
//!        │                                                          ▲
//!        ▼                                                          │ HTTPS POST
//!  ┌───────────┐    ┌────────────┐    ┌────────────┐    ┌─────────────────┐
//!  │   http    │───▶│  handlers  │───▶│ dashboard  │───▶│ gateway client  │
//!  │  server   │    │            │    │ CallState  │    │ envelope + key  │
//!  └───────────┘    └────────────┘    └────────────┘    └─────────────────┘
//!
//!  Cross-cutting: config (TOML + KALP_API_KEY), observability (tracing,
//!  metrics), lifecycle (startup, signals, shutdown)
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use kalp_airdrop::http::HttpServer;
use kalp_airdrop::lifecycle::{signals, startup, Shutdown};

#[derive(Parser)]
#[command(name = "kalp-airdrop")]
#[command(about = "JSON API for the Kalp airdrop dashboard", long_about = None)]
struct Args {
    /// Path to the TOML configuration file.
    #[arg(short, long, env = "KALP_CONFIG")]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = startup::load(args.config.as_deref())?;
    tracing::info!("kalp-airdrop v{} starting", env!("CARGO_PKG_VERSION"));

    let startup::Startup { config, dashboard } = startup::initialize(config)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    tokio::spawn(signals::shutdown_on_signal(shutdown.clone()));

    let server = HttpServer::new(&config.listener, dashboard);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
