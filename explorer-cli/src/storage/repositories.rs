//! Repository list store
//!
//! Owns the serialization contract of the repository list: one slot holding
//! the whole list as a JSON array, fully replaced on every save.

use std::sync::Arc;

use explorer_core::domain::repository::{REPOSITORIES_STORAGE_KEY, RepositorySummary};
use tracing::debug;

use super::{Result, Storage, StoreError};

/// Typed access to the repository list slot
#[derive(Clone)]
pub struct RepositoryStore {
    storage: Arc<dyn Storage>,
    key: String,
}

impl RepositoryStore {
    /// Creates a store over the default `@GithubExplorer:repositories` slot
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self::with_key(storage, REPOSITORIES_STORAGE_KEY)
    }

    /// Creates a store over a custom slot
    pub fn with_key(storage: Arc<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Load the stored list
    ///
    /// An absent or blank slot yields an empty list. A slot that does not decode is
    /// reported as [`StoreError::Corrupted`]; there is no fallback.
    pub fn load(&self) -> Result<Vec<RepositorySummary>> {
        let raw = match self.storage.get_item(&self.key)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                debug!("No stored repositories under {}", self.key);
                return Ok(Vec::new());
            }
        };

        let repositories: Vec<RepositorySummary> =
            serde_json::from_str(&raw).map_err(|source| StoreError::Corrupted {
                key: self.key.clone(),
                source,
            })?;

        debug!("Loaded {} stored repositories", repositories.len());
        Ok(repositories)
    }

    /// Replace the stored list with `repositories`
    pub fn save(&self, repositories: &[RepositorySummary]) -> Result<()> {
        let raw = serde_json::to_string(repositories).map_err(|source| StoreError::Encode {
            key: self.key.clone(),
            source,
        })?;

        self.storage.set_item(&self.key, &raw)
    }
}
