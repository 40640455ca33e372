//! Route paths
//!
//! Paths consumed by whatever router shows the repository detail screen.

/// Prefix of the repository detail route
pub const REPOSITORY_ROUTE_PREFIX: &str = "/repositories";

/// Detail route for a repository, e.g. `/repositories/facebook/react`
pub fn repository_path(full_name: &str) -> String {
    format!("{}/{}", REPOSITORY_ROUTE_PREFIX, full_name)
}
