//! Repository domain model
//!
//! The minimal projection of a GitHub repository the dashboard works with.

use serde::{Deserialize, Serialize};

/// Storage slot that holds the serialized repository list
pub const REPOSITORIES_STORAGE_KEY: &str = "@GithubExplorer:repositories";

/// Summary of a repository as returned by `GET /repos/{owner}/{name}`
///
/// Fields GitHub sends beyond these are ignored when decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// `owner/name`, used as the display label and the routing key
    pub full_name: String,

    /// Free-form description, `null` for repositories without one
    pub description: Option<String>,

    /// Account that owns the repository
    pub owner: Owner,
}

/// Owner of a repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    /// GitHub username
    pub login: String,

    /// URL of the owner's avatar image
    pub avatar_url: String,
}

impl RepositorySummary {
    /// Description to display, empty when the repository has none
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

impl std::fmt::Display for RepositorySummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.full_name)
    }
}
