//! Add command handler
//!
//! Submits a single search term and prints the outcome.

use anyhow::{Result, anyhow};
use colored::*;

use crate::dashboard::{Dashboard, SubmitOutcome};
use crate::render::print_entries;

/// Handle `add <owner/name>`
///
/// Fails with the dashboard's error message when nothing was added; the
/// message is printed once, by `main`.
pub async fn handle_add_command(mut dashboard: Dashboard, name: &str) -> Result<()> {
    dashboard.set_search_term(name);

    match dashboard.handle_add_repository().await {
        SubmitOutcome::Added(repository) => {
            println!(
                "{} {}",
                "✓ Added".green().bold(),
                repository.full_name.cyan()
            );
            println!();
            print_entries(&dashboard.entries());
            Ok(())
        }
        SubmitOutcome::Invalid | SubmitOutcome::FetchFailed => Err(anyhow!(
            "{}",
            dashboard.input_error().unwrap_or("Failed to add repository")
        )),
    }
}
