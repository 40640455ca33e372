//! Repository-related API endpoints

use async_trait::async_trait;
use explorer_core::domain::repository::RepositorySummary;
use tracing::debug;

use crate::GithubClient;
use crate::error::{ClientError, Result};

/// Something that can resolve `owner/name` to a repository summary
///
/// The dashboard depends on this trait rather than on [`GithubClient`]
/// directly, so lookups can be replaced in tests.
#[async_trait]
pub trait RepositoryLookup: Send + Sync {
    /// Fetch the summary of the repository named `full_name`
    ///
    /// # Arguments
    /// * `full_name` - Repository in `owner/name` form
    async fn lookup(&self, full_name: &str) -> Result<RepositorySummary>;
}

impl GithubClient {
    // =============================================================================
    // Repositories
    // =============================================================================

    /// Get a repository by its full name
    ///
    /// # Arguments
    /// * `full_name` - Repository in `owner/name` form; surrounding whitespace
    ///   and slashes are ignored
    ///
    /// # Returns
    /// The repository summary
    ///
    /// # Example
    /// ```no_run
    /// # use explorer_client::GithubClient;
    /// # async fn example() -> anyhow::Result<()> {
    /// let client = GithubClient::new("https://api.github.com");
    /// let repo = client.get_repository("rust-lang/rust").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_repository(&self, full_name: &str) -> Result<RepositorySummary> {
        let full_name = full_name.trim().trim_matches('/');
        if full_name.is_empty() {
            return Err(ClientError::InvalidRequest(
                "repository name is empty".to_string(),
            ));
        }

        debug!("Fetching repository {}", full_name);
        let response = self.get(&format!("repos/{}", full_name)).send().await?;

        self.handle_response(response, full_name).await
    }
}

#[async_trait]
impl RepositoryLookup for GithubClient {
    async fn lookup(&self, full_name: &str) -> Result<RepositorySummary> {
        self.get_repository(full_name).await
    }
}
