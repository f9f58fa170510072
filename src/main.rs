use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use minepools::application::{Cli, CommandExecutor};
use minepools::shared::config::{ConfigLoader, DashboardConfig};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cli = Cli::parse();

    // Config file is optional; every section falls back to defaults
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_config(path)
            .with_context(|| format!("load config from {}", path))?,
        None => DashboardConfig::default(),
    };

    CommandExecutor::execute(cli, config).await?;
    Ok(())
}
