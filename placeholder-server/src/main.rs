//! `image-placeholder-mcp` binary

use clap::Parser;
use image_placeholder_server::{Cli, ServerConfig, run_server};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.logging().initialize()?;

    let config = ServerConfig::from_cli(&cli)?;
    info!(
        log_level = %config.logging.level,
        log_format = ?config.logging.format,
        "Configuration loaded"
    );

    run_server(config).await?;
    Ok(())
}
