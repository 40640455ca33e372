//! Core domain types
//!
//! These types are decoded from the GitHub API by the client and persisted
//! as-is by the CLI, so their serde shape is the storage format too.

pub mod repository;
