//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod add;
mod interactive;
mod list;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Subcommand;
use explorer_client::GithubClient;
use reqwest::Client;
use tracing::debug;

use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::storage::{FileStorage, RepositoryStore};

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Look up a repository and add it to the list
    Add {
        /// Repository as owner/name
        name: String,
    },
    /// Show the stored repositories
    List,
    /// Read owner/name lines from stdin and add each one (default)
    Interactive,
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module. Without a
/// subcommand the interactive dashboard runs.
pub async fn handle_command(command: Option<Commands>, config: &Config) -> Result<()> {
    let dashboard = build_dashboard(config)?;

    match command.unwrap_or(Commands::Interactive) {
        Commands::Add { name } => add::handle_add_command(dashboard, &name).await,
        Commands::List => list::handle_list_command(&dashboard),
        Commands::Interactive => interactive::handle_interactive_command(dashboard).await,
    }
}

/// Wire the GitHub client and the on-disk store into a mounted dashboard
fn build_dashboard(config: &Config) -> Result<Dashboard> {
    let mut http = Client::builder();
    if let Some(timeout) = config.timeout {
        http = http.timeout(timeout);
    }
    let http = http.build().context("Failed to build HTTP client")?;

    let mut client = GithubClient::with_client(&config.api_url, http);
    if let Some(token) = &config.token {
        client = client.with_token(token);
    }
    debug!(
        "GitHub client for {} (authenticated: {})",
        client.base_url(),
        client.is_authenticated()
    );

    let storage = FileStorage::new(&config.storage_dir);
    let store = RepositoryStore::new(Arc::new(storage));

    Dashboard::mount(Arc::new(client), store).with_context(|| {
        format!(
            "Failed to load stored repositories from {}",
            config.storage_dir.display()
        )
    })
}
