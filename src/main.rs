//! Process bootstrap for the analytics CORS gateway.

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use analytics_gateway::config::{load_config, GatewayConfig};
use analytics_gateway::observability::{logging, metrics};
use analytics_gateway::GatewayServer;

#[derive(Parser)]
#[command(name = "analytics-gateway")]
#[command(about = "CORS-enabling relay in front of the analytics API", long_about = None)]
struct Cli {
    /// Configuration file (TOML). Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the upstream host.
    #[arg(short, long)]
    upstream_host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };
    if let Some(port) = cli.port {
        config.listener.bind_address = format!("0.0.0.0:{port}");
    }
    if let Some(host) = cli.upstream_host {
        config.upstream.host = host;
    }

    logging::init_logging(&config.observability);

    tracing::info!("analytics-gateway v0.1.0 starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_host = %config.upstream.host,
        path_prefix = %config.upstream.path_prefix,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Open http://localhost:{} in your browser to view the visualizer",
        local_addr.port()
    );

    let server = GatewayServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
