use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use menowell::AppState;
use menowell_generation::{HostedImageGenerator, HostedTextGenerator};
use menowell_store::HostedStore;

/// menowell - personalized menopause nutrition
#[derive(Parser)]
#[command(name = "menowell")]
#[command(about = "Personalized nutrition and wellness service", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = menowell::config::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    menowell::observability::init_observability("menowell", &config.observability.log_level)?;

    match cli.command {
        Commands::Serve { host, port } => serve_command(config, host, port).await,
    }
}

#[tracing::instrument(skip(config))]
async fn serve_command(
    config: menowell::config::Config,
    host_override: Option<String>,
    port_override: Option<u16>,
) -> Result<()> {
    tracing::info!("Starting menowell server...");

    let host = host_override.unwrap_or(config.server.host);
    let port = port_override.unwrap_or(config.server.port);

    let state = AppState {
        store: Arc::new(HostedStore::new(
            config.backend.base_url.clone(),
            config.backend.api_key.clone(),
        )),
        text: Arc::new(HostedTextGenerator::new(
            config.backend.base_url.clone(),
            config.backend.api_key.clone(),
        )),
        image: Arc::new(HostedImageGenerator::new(
            config.backend.base_url,
            config.backend.api_key,
        )),
    };

    let app = menowell::create_app(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
