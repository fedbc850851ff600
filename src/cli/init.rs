//! Init command.
//!
//! Creates a project in the store with the caller as owner and links the
//! current directory to it.

use tracing::info;

use crate::cli::output;
use crate::cli::prompt::Prompt;
use crate::core::access::PasswordSource;
use crate::core::config::{self, Config};
use crate::core::domain::Role;
use crate::core::password;
use crate::core::{identity, store, validation};
use crate::error::{ConfigError, Result};

/// Initialize a new project.
pub fn execute(name: &str) -> Result<()> {
    if Config::exists() {
        return Err(ConfigError::AlreadyInitialized.into());
    }
    validation::validate_project_name(name)?;

    let store = store::default_backend()?;
    let user = identity::current_user();
    let project_password = Prompt::new_password().password("Project password")?;
    let hash = password::hash_password(&project_password);

    store.create_project(name, &user, hash.clone())?;
    Config::new(name, Role::Owner, Some(hash)).save()?;
    config::ensure_gitignore()?;
    info!(project = %name, owner = %user, "project initialized");

    output::success(&format!("initialized {}", output::key(name)));
    output::kv("owner", &user);
    output::hint(&format!(
        "add a variable: {}",
        output::cmd("envhub add NAME VALUE")
    ));

    Ok(())
}
