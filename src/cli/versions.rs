//! Versions command.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::store::{self, Store};
use crate::error::Result;

/// List published versions, newest first.
pub fn execute() -> Result<()> {
    let config = Config::load()?;
    let store = store::default_backend()?;
    let versions = store.versions(&config.project.name)?;

    if versions.is_empty() {
        output::dimmed("no versions published");
        return Ok(());
    }

    for version in versions.iter().rev() {
        output::data(&version.to_string());
    }
    Ok(())
}
