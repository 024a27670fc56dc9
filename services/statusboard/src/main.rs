//! Statusboard CLI
//!
//! Command-line interface for the dashboard-side status poller.

use std::path::PathBuf;

use clap::Parser;
use statusboard::{load_config, Config};
use tracing::Level;

#[derive(Parser)]
#[command(name = "statusboard")]
#[command(about = "Dashboard-side status and log poller for a monitor bot backend")]
#[command(version)]
struct Args {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend host (overrides config file)
    #[arg(long)]
    host: Option<String>,

    /// Backend port (overrides config file)
    #[arg(long)]
    port: Option<u16>,

    /// Tick period in milliseconds (overrides config file)
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Log level
    #[arg(short, long, default_value = "info")]
    log_level: Level,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let mut config = if let Some(config_path) = &args.config {
        tracing::debug!("Loading configuration from {:?}", config_path);
        load_config(config_path)?
    } else {
        tracing::debug!("Using default configuration");
        Config::default()
    };

    if let Some(host) = args.host {
        config.backend.host = host;
    }
    if let Some(port) = args.port {
        config.backend.port = port;
    }
    if let Some(interval_ms) = args.interval_ms {
        config.poll_interval_ms = interval_ms;
    }

    tracing::info!("Starting statusboard against {}", config.backend.base_url());

    statusboard::run(config).await?;

    Ok(())
}
