//! Reset command.
//!
//! Unlinks the current directory: removes `.envhub.toml` and the sealed
//! `.env` written by `clone`. The project in the store is left alone.

use std::path::Path;

use tracing::{debug, info};

use crate::cli::output;
use crate::core::config::Config;
use crate::core::constants;
use crate::core::domain::DotEnv;
use crate::core::env;
use crate::error::{ConfigError, Result};

/// Unlink the current directory from its project.
pub fn execute() -> Result<()> {
    if !Config::exists() {
        return Err(ConfigError::NotInitialized.into());
    }

    // A broken link file is still removed.
    let name = match Config::load() {
        Ok(config) => Some(config.project.name),
        Err(e) => {
            debug!(error = %e, "unlinking unreadable config");
            None
        }
    };

    std::fs::remove_file(Config::config_path())?;

    let env_path = Path::new(constants::ENV_FILE);
    if env_path.exists() {
        if env::is_sealed(&DotEnv::load(env_path)?) {
            std::fs::remove_file(env_path)?;
            debug!("removed sealed .env");
        } else {
            output::warn("kept .env: it holds values that are not sealed");
        }
    }
    info!(project = ?name, "directory unlinked");

    match name {
        Some(name) => output::success(&format!("unlinked {}", output::key(&name))),
        None => output::success("unlinked this directory"),
    }
    Ok(())
}
