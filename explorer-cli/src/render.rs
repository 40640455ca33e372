//! List renderer
//!
//! Projects the repository list into navigable entries and prints them.

use std::collections::HashSet;

use colored::*;
use explorer_core::domain::repository::RepositorySummary;
use explorer_core::routes::repository_path;

/// One navigable row of the repository list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryEntry {
    /// Rendering identity; duplicates in the list share a key
    pub key: String,
    /// Owner avatar image
    pub avatar_url: String,
    /// Primary label (`owner/name`)
    pub title: String,
    /// Secondary label, empty when the repository has no description
    pub description: String,
    /// Detail route the entry links to
    pub route: String,
}

impl From<&RepositorySummary> for RepositoryEntry {
    fn from(repo: &RepositorySummary) -> Self {
        RepositoryEntry {
            key: repo.full_name.clone(),
            avatar_url: repo.owner.avatar_url.clone(),
            title: repo.full_name.clone(),
            description: repo.description_or_empty().to_string(),
            route: repository_path(&repo.full_name),
        }
    }
}

/// Build one entry per repository, in list order
pub fn render_entries(repositories: &[RepositorySummary]) -> Vec<RepositoryEntry> {
    repositories.iter().map(RepositoryEntry::from).collect()
}

/// Print the dashboard title
pub fn print_title() {
    println!("{}", "Explore GitHub repositories".bold());
    println!("{}", "Type owner/name and press Enter (exit to quit)".dimmed());
}

/// Print the current error message, if any
pub fn print_error(message: Option<&str>) {
    if let Some(message) = message {
        println!("{} {}", "✗".red().bold(), message.red());
    }
}

/// Echo the search term kept after a failed submission
pub fn print_kept_term(term: &str) {
    if !term.trim().is_empty() {
        println!("  {} {}", "Search term kept:".dimmed(), term);
    }
}

/// Print the rendered repository list
pub fn print_entries(entries: &[RepositoryEntry]) {
    if entries.is_empty() {
        println!("{}", "No repositories added yet.".yellow());
        return;
    }

    println!(
        "{}",
        format!("{} repositor{}:", entries.len(), plural(entries.len())).bold()
    );
    println!();
    for (entry, repeated) in entries.iter().zip(repeated_keys(entries)) {
        print_entry(entry, repeated);
    }
}

/// For each entry, whether an earlier entry already used its key
fn repeated_keys(entries: &[RepositoryEntry]) -> Vec<bool> {
    let mut seen = HashSet::new();
    entries
        .iter()
        .map(|entry| !seen.insert(entry.key.as_str()))
        .collect()
}

fn print_entry(entry: &RepositoryEntry, repeated: bool) {
    let marker = if repeated { " (added again)" } else { "" };
    println!(
        "  {}{} {}",
        entry.title.bold(),
        marker.yellow(),
        "›".dimmed()
    );
    if !entry.description.is_empty() {
        println!("    {}", entry.description.dimmed());
    }
    println!("    Avatar: {}", entry.avatar_url.dimmed());
    println!("    Route:  {}", entry.route.cyan());
    println!();
}

fn plural(count: usize) -> &'static str {
    if count == 1 { "y" } else { "ies" }
}
