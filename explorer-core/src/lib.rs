//! Explorer Core
//!
//! Core types shared by the GitHub Explorer crates.
//!
//! This crate contains:
//! - Domain types: the repository summary kept in the dashboard list
//! - Routes: paths of the screens an entry links to

pub mod domain;
pub mod routes;
