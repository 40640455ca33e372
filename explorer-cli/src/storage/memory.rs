//! In-memory storage
//!
//! Volatile slot store used by tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use super::{Result, Storage};

/// In-memory implementation of Storage
///
/// Clones share the same slots, so a test can keep a handle and inspect
/// what the dashboard wrote.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    /// Creates an empty in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates storage with one slot already populated
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .slots
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        storage
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let slots = self.slots.lock().unwrap();
        Ok(slots.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut slots = self.slots.lock().unwrap();
        slots.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_then_get() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("k").unwrap(), None);

        storage.set_item("k", "v1").unwrap();
        storage.set_item("k", "v2").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_clones_share_slots() {
        let storage = MemoryStorage::with_item("k", "v");
        let handle = storage.clone();

        storage.set_item("other", "x").unwrap();
        assert_eq!(handle.get_item("k").unwrap().as_deref(), Some("v"));
        assert_eq!(handle.get_item("other").unwrap().as_deref(), Some("x"));
    }
}
