//! Dashboard component
//!
//! Holds the search term, the error message and the repository list, and
//! implements the add-repository workflow:
//! input → validation → lookup → append → write-through to storage.

use std::sync::Arc;

use explorer_client::{ClientError, RepositoryLookup};
use explorer_core::domain::repository::RepositorySummary;
use tracing::{debug, info, warn};

use crate::render::{RepositoryEntry, render_entries};
use crate::storage::{self, RepositoryStore};

/// Shown when the search term is empty
pub const EMPTY_INPUT_MESSAGE: &str = "Enter the repository owner/name";

/// Shown when the lookup fails for any reason
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching the repository";

/// Result of one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The repository was found and appended to the list
    Added(RepositorySummary),
    /// The search term was empty; no request was made
    Invalid,
    /// The lookup failed; the list is unchanged
    FetchFailed,
}

/// The single screen of the explorer
///
/// Submissions take `&mut self`, so a dashboard never has more than one
/// lookup in flight.
pub struct Dashboard {
    lookup: Arc<dyn RepositoryLookup>,
    store: RepositoryStore,
    search_term: String,
    input_error: Option<String>,
    repositories: Vec<RepositorySummary>,
}

impl Dashboard {
    /// Mount the dashboard, loading the list from `store`
    ///
    /// The loaded list is written straight back, so the slot exists after
    /// the first mount. A corrupted slot aborts mounting.
    pub fn mount(
        lookup: Arc<dyn RepositoryLookup>,
        store: RepositoryStore,
    ) -> storage::Result<Self> {
        let repositories = store.load()?;
        info!("Mounted dashboard with {} repositories", repositories.len());

        let dashboard = Self {
            lookup,
            store,
            search_term: String::new(),
            input_error: None,
            repositories,
        };
        dashboard.persist();

        Ok(dashboard)
    }

    /// Text currently in the search field
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Replace the text in the search field
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Current error message, if any
    pub fn input_error(&self) -> Option<&str> {
        self.input_error.as_deref()
    }

    /// Whether an error message is showing
    pub fn has_error(&self) -> bool {
        self.input_error.is_some()
    }

    /// Repositories in insertion order
    pub fn repositories(&self) -> &[RepositorySummary] {
        &self.repositories
    }

    /// Navigable entries for the current list
    pub fn entries(&self) -> Vec<RepositoryEntry> {
        render_entries(&self.repositories)
    }

    /// Submit the current search term
    ///
    /// An empty or whitespace-only term sets [`EMPTY_INPUT_MESSAGE`] without
    /// touching the network. Otherwise exactly one lookup is made: on success
    /// the repository is appended and both the term and the error are
    /// cleared; on failure [`FETCH_ERROR_MESSAGE`] is set and nothing else
    /// changes.
    pub async fn handle_add_repository(&mut self) -> SubmitOutcome {
        let term = self.search_term.trim().to_string();
        if term.is_empty() {
            self.input_error = Some(EMPTY_INPUT_MESSAGE.to_string());
            return SubmitOutcome::Invalid;
        }

        match self.lookup.lookup(&term).await {
            Ok(repository) => {
                info!("Added repository {}", repository.full_name);
                let mut repositories = self.repositories.clone();
                repositories.push(repository.clone());
                self.set_repositories(repositories);
                self.search_term.clear();
                self.input_error = None;
                SubmitOutcome::Added(repository)
            }
            Err(e) => {
                debug!("Lookup of {} failed ({}): {}", term, failure_kind(&e), e);
                self.input_error = Some(FETCH_ERROR_MESSAGE.to_string());
                SubmitOutcome::FetchFailed
            }
        }
    }

    fn set_repositories(&mut self, repositories: Vec<RepositorySummary>) {
        self.repositories = repositories;
        self.persist();
    }

    /// Write the list through to storage; failures are logged only
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.repositories) {
            warn!("Failed to persist repositories: {}", e);
        }
    }
}

/// Short label for a lookup failure, used in logs only
fn failure_kind(error: &ClientError) -> &'static str {
    if error.is_not_found() {
        "not found"
    } else if error.is_client_error() {
        "rejected"
    } else if error.is_server_error() {
        "server error"
    } else {
        "transport"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MemoryStorage, Storage, StoreError};
    use async_trait::async_trait;
    use explorer_core::domain::repository::{Owner, REPOSITORIES_STORAGE_KEY};
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Lookup backed by a fixed table that records every request
    struct FakeLookup {
        known: HashMap<String, RepositorySummary>,
        requests: Mutex<Vec<String>>,
    }

    impl FakeLookup {
        fn with(repos: &[RepositorySummary]) -> Arc<Self> {
            Arc::new(Self {
                known: repos
                    .iter()
                    .map(|r| (r.full_name.clone(), r.clone()))
                    .collect(),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl RepositoryLookup for FakeLookup {
        async fn lookup(&self, full_name: &str) -> explorer_client::Result<RepositorySummary> {
            self.requests.lock().unwrap().push(full_name.to_string());
            self.known
                .get(full_name)
                .cloned()
                .ok_or_else(|| ClientError::NotFound(full_name.to_string()))
        }
    }

    fn react() -> RepositorySummary {
        RepositorySummary {
            full_name: "facebook/react".to_string(),
            description: Some("A JS library".to_string()),
            owner: Owner {
                login: "facebook".to_string(),
                avatar_url: "https://x/facebook.png".to_string(),
            },
        }
    }

    fn rust() -> RepositorySummary {
        RepositorySummary {
            full_name: "rust-lang/rust".to_string(),
            description: None,
            owner: Owner {
                login: "rust-lang".to_string(),
                avatar_url: "https://x/rust-lang.png".to_string(),
            },
        }
    }

    /// Storage whose writes always fail
    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> storage::Result<Option<String>> {
            Ok(None)
        }

        fn set_item(&self, key: &str, _value: &str) -> storage::Result<()> {
            Err(StoreError::Io {
                key: key.to_string(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            })
        }
    }

    fn mount(lookup: Arc<FakeLookup>, storage: &MemoryStorage) -> Dashboard {
        let store = RepositoryStore::new(Arc::new(storage.clone()));
        Dashboard::mount(lookup, store).unwrap()
    }

    fn stored(storage: &MemoryStorage) -> Vec<RepositorySummary> {
        let raw = storage.get_item(REPOSITORIES_STORAGE_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[tokio::test]
    async fn test_add_repository_from_empty_storage() {
        let lookup = FakeLookup::with(&[react()]);
        let storage = MemoryStorage::new();
        let mut dashboard = mount(lookup.clone(), &storage);

        dashboard.set_search_term("facebook/react");
        let outcome = dashboard.handle_add_repository().await;

        assert_eq!(outcome, SubmitOutcome::Added(react()));
        assert_eq!(dashboard.repositories(), &[react()]);
        assert_eq!(dashboard.search_term(), "");
        assert_eq!(dashboard.input_error(), None);
        assert_eq!(stored(&storage), vec![react()]);
        assert_eq!(lookup.requests(), vec!["facebook/react"]);
    }

    #[tokio::test]
    async fn test_empty_term_sets_validation_error_without_request() {
        let lookup = FakeLookup::with(&[react()]);
        let storage = MemoryStorage::new();
        let mut dashboard = mount(lookup.clone(), &storage);

        for term in ["", "   ", "\t\n"] {
            dashboard.set_search_term(term);
            let outcome = dashboard.handle_add_repository().await;

            assert_eq!(outcome, SubmitOutcome::Invalid);
            assert_eq!(dashboard.input_error(), Some(EMPTY_INPUT_MESSAGE));
            assert!(dashboard.repositories().is_empty());
        }

        assert!(lookup.requests().is_empty());
    }

    #[tokio::test]
    async fn test_failed_lookup_keeps_list_and_input() {
        let lookup = FakeLookup::with(&[react()]);
        let storage = MemoryStorage::new();
        let mut dashboard = mount(lookup.clone(), &storage);

        dashboard.set_search_term("facebook/react");
        dashboard.handle_add_repository().await;

        dashboard.set_search_term("doesnotexist/doesnotexist");
        let outcome = dashboard.handle_add_repository().await;

        assert_eq!(outcome, SubmitOutcome::FetchFailed);
        assert_eq!(dashboard.input_error(), Some(FETCH_ERROR_MESSAGE));
        assert_eq!(dashboard.search_term(), "doesnotexist/doesnotexist");
        assert_eq!(dashboard.repositories(), &[react()]);
        assert_eq!(stored(&storage), vec![react()]);
        assert_eq!(lookup.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_success_clears_previous_error() {
        let lookup = FakeLookup::with(&[react()]);
        let storage = MemoryStorage::new();
        let mut dashboard = mount(lookup, &storage);

        dashboard.set_search_term("");
        dashboard.handle_add_repository().await;
        assert!(dashboard.has_error());

        dashboard.set_search_term("facebook/react");
        dashboard.handle_add_repository().await;
        assert!(!dashboard.has_error());
    }

    #[tokio::test]
    async fn test_term_is_trimmed_before_lookup() {
        let lookup = FakeLookup::with(&[react()]);
        let storage = MemoryStorage::new();
        let mut dashboard = mount(lookup.clone(), &storage);

        dashboard.set_search_term("  facebook/react \n");
        let outcome = dashboard.handle_add_repository().await;

        assert_eq!(outcome, SubmitOutcome::Added(react()));
        assert_eq!(lookup.requests(), vec!["facebook/react"]);
    }

    #[tokio::test]
    async fn test_list_is_append_only_without_dedup() {
        let lookup = FakeLookup::with(&[react(), rust()]);
        let storage = MemoryStorage::new();
        let mut dashboard = mount(lookup, &storage);

        for term in ["rust-lang/rust", "facebook/react", "rust-lang/rust"] {
            dashboard.set_search_term(term);
            dashboard.handle_add_repository().await;
        }

        assert_eq!(dashboard.repositories(), &[rust(), react(), rust()]);
        assert_eq!(stored(&storage), dashboard.repositories());

        let keys: Vec<_> = dashboard.entries().into_iter().map(|e| e.key).collect();
        assert_eq!(keys, vec!["rust-lang/rust", "facebook/react", "rust-lang/rust"]);
    }

    #[tokio::test]
    async fn test_mount_loads_and_writes_back_stored_list() {
        let storage = MemoryStorage::new();
        RepositoryStore::new(Arc::new(storage.clone()))
            .save(&[rust(), react()])
            .unwrap();

        let dashboard = mount(FakeLookup::with(&[]), &storage);

        assert_eq!(dashboard.repositories(), &[rust(), react()]);
        assert_eq!(dashboard.entries()[1].route, "/repositories/facebook/react");
        assert_eq!(stored(&storage), vec![rust(), react()]);
    }

    #[test]
    fn test_mount_creates_slot_for_empty_storage() {
        let storage = MemoryStorage::new();
        let dashboard = mount(FakeLookup::with(&[]), &storage);

        assert!(dashboard.repositories().is_empty());
        assert_eq!(
            storage.get_item(REPOSITORIES_STORAGE_KEY).unwrap().as_deref(),
            Some("[]")
        );
    }

    #[tokio::test]
    async fn test_failed_write_still_adds_without_error() {
        let store = RepositoryStore::new(Arc::new(ReadOnlyStorage));
        let mut dashboard = Dashboard::mount(FakeLookup::with(&[react()]), store).unwrap();

        dashboard.set_search_term("facebook/react");
        let outcome = dashboard.handle_add_repository().await;

        assert_eq!(outcome, SubmitOutcome::Added(react()));
        assert_eq!(dashboard.repositories(), &[react()]);
        assert_eq!(dashboard.search_term(), "");
        assert_eq!(dashboard.input_error(), None);
    }

    #[test]
    fn test_failure_kind() {
        assert_eq!(failure_kind(&ClientError::NotFound("a/b".to_string())), "not found");
        assert_eq!(failure_kind(&ClientError::api_error(403, "limit")), "rejected");
        assert_eq!(failure_kind(&ClientError::api_error(500, "boom")), "server error");
        assert_eq!(
            failure_kind(&ClientError::ParseError("bad json".to_string())),
            "transport"
        );
    }

    #[test]
    fn test_mount_fails_on_corrupted_storage() {
        let slots = MemoryStorage::with_item(REPOSITORIES_STORAGE_KEY, "not json");
        let store = RepositoryStore::new(Arc::new(slots));

        let result = Dashboard::mount(FakeLookup::with(&[]), store);
        assert!(matches!(result, Err(storage::StoreError::Corrupted { .. })));
    }
}
