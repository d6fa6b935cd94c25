use anyhow::Context;
use clap::Parser;
use reasonedge::Provider;
use reasonedge_server::{build_provider, build_reasoner, serve, telemetry, ServiceConfig};
use std::path::PathBuf;

/// ReasonEdge: structured step-by-step reasoning over a hosted language model
#[derive(Parser, Debug)]
#[command(name = "reasonedge-server", version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file (defaults to ./reasonedge.toml when present)
    #[arg(short, long, env = "REASONEDGE_CONFIG")]
    config: Option<PathBuf>,

    /// Interface to bind, overriding the config file
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overriding the config file
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let mut config =
        ServiceConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    telemetry::init(&config.logging);

    let provider = build_provider(&config).context("failed to build provider")?;
    tracing::info!(
        "Using provider {} with model {}",
        provider.info().name,
        config.model_name
    );
    let reasoner = build_reasoner(provider, &config);

    serve(&config, reasoner, shutdown_signal()).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
