//! GitHub Explorer CLI
//!
//! Look up GitHub repositories by owner/name, keep the ones found in a local
//! store, and list them with their detail routes.

mod commands;
mod config;
mod dashboard;
mod render;
mod storage;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::{Config, default_storage_dir};
use explorer_client::DEFAULT_API_URL;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "github-explorer")]
#[command(about = "Explore GitHub repositories", long_about = None)]
struct Cli {
    /// GitHub API URL
    #[arg(long, env = "GITHUB_EXPLORER_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Directory where the repository list is stored
    #[arg(long, env = "GITHUB_EXPLORER_STORAGE_DIR")]
    storage_dir: Option<PathBuf>,

    /// GitHub token used to authenticate requests
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, env = "GITHUB_EXPLORER_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the rendered list
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "github_explorer=info,explorer_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let storage_dir = match cli.storage_dir {
        Some(dir) => dir,
        None => default_storage_dir()?,
    };

    let config = Config {
        api_url: cli.api_url,
        storage_dir,
        token: cli.token,
        timeout: cli.timeout_secs.map(Duration::from_secs),
    };
    config.validate()?;
    debug!(
        "Loaded configuration: api_url={}, storage_dir={}",
        config.api_url,
        config.storage_dir.display()
    );

    handle_command(cli.command, &config).await
}
