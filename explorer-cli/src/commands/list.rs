//! List command handler

use anyhow::Result;
use tracing::debug;

use crate::dashboard::Dashboard;
use crate::render::print_entries;

/// Handle `list`
pub fn handle_list_command(dashboard: &Dashboard) -> Result<()> {
    debug!("Listing {} stored repositories", dashboard.repositories().len());
    print_entries(&dashboard.entries());
    Ok(())
}
