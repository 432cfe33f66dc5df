//! DCF server entry point.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use dcf_server::{Server, ServerConfig};

/// DCF valuation web server
#[derive(Parser, Debug)]
#[command(name = "dcf-server")]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, default_value = "config/dcf.toml")]
    config: PathBuf,

    /// Host address to bind to (overrides the config file)
    #[arg(short = 'H', long)]
    host: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_filter = if args.verbose {
        "debug,tower_http=debug"
    } else {
        "info,tower_http=info"
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("DCF Server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let mut config = if args.config.exists() {
        info!("Loading configuration from {}", args.config.display());
        ServerConfig::from_file(&args.config)?
    } else {
        info!("Using default configuration");
        ServerConfig::default()
    };

    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    Server::new(config).start().await?;

    Ok(())
}
