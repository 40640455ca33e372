//! Storage layer
//!
//! A string-keyed slot store that survives restarts, plus the typed
//! repository list stored in one of its slots.
//!
//! The slot store is trait-based so the dashboard can run against memory
//! in tests and against the disk in the binary.

mod file;
#[cfg(test)]
mod memory;
mod repositories;

use thiserror::Error;

// Re-export implementations
pub use file::FileStorage;
#[cfg(test)]
pub use memory::MemoryStorage;
pub use repositories::RepositoryStore;

/// Result type alias for storage operations
pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors raised by the storage layer
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing a slot failed
    #[error("Storage I/O failed for '{key}': {source}")]
    Io {
        /// Slot key
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A slot holds data that does not decode
    #[error("Stored data under '{key}' is corrupted: {source}")]
    Corrupted {
        /// Slot key
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be encoded for storage
    #[error("Failed to encode data for '{key}': {source}")]
    Encode {
        /// Slot key
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Persistent string-keyed storage, modelled on a browser's local storage
pub trait Storage: Send + Sync {
    /// Read the value stored under `key`, `None` when the slot is empty
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}
