//! Configuration module
//!
//! Handles CLI configuration: where the GitHub API lives, where the
//! repository list is stored, and how requests authenticate.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

/// Directory name used under the platform data directory
const APP_DIR_NAME: &str = "github-explorer";

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the GitHub API
    pub api_url: String,

    /// Directory holding the persistent storage slots
    pub storage_dir: PathBuf,

    /// Personal access token, if any
    pub token: Option<String>,

    /// Per-request timeout; `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Config {
    /// Validates the configuration
    pub fn validate(&self) -> Result<()> {
        if self.api_url.is_empty() {
            anyhow::bail!("api_url cannot be empty");
        }

        if !self.api_url.starts_with("http://") && !self.api_url.starts_with("https://") {
            anyhow::bail!("api_url must start with http:// or https://");
        }

        if self.storage_dir.as_os_str().is_empty() {
            anyhow::bail!("storage_dir cannot be empty");
        }

        if self.timeout.is_some_and(|t| t.is_zero()) {
            anyhow::bail!("timeout must be greater than 0");
        }

        Ok(())
    }
}

/// Default storage directory: `<platform data dir>/github-explorer`
pub fn default_storage_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine the user data directory")?;
    Ok(base.join(APP_DIR_NAME))
}
