//! Clone command.
//!
//! Links the current directory to an existing project and writes its
//! variables to `.env` in sealed form.

use std::path::Path;

use tracing::info;

use crate::cli::output;
use crate::cli::prompt::Prompt;
use crate::core::access::{self, AccessMaterial};
use crate::core::config::{self, Config};
use crate::core::constants;
use crate::core::domain::Role;
use crate::core::store::{self, Store};
use crate::core::{env, identity};
use crate::error::{ConfigError, Result, StoreError};

/// Clone a project into the current directory.
pub fn execute(name: &str) -> Result<()> {
    if Config::exists() {
        return Err(ConfigError::AlreadyInitialized.into());
    }
    if Path::new(constants::ENV_FILE).exists() {
        return Err(ConfigError::EnvFileExists.into());
    }

    let store = store::default_backend()?;
    let project = store.project(name)?;
    let user = identity::current_user();

    let record = if project.owner == user {
        None
    } else {
        Some(
            store
                .access(name, &user)?
                .ok_or_else(|| StoreError::NoAccess {
                    project: name.to_string(),
                    user: user.clone(),
                })?,
        )
    };
    let role = record.as_ref().map_or(Role::Owner, |r| r.role);

    // Verify the password before touching the directory.
    let material = AccessMaterial {
        password_hash: Some(&project.password_hash),
        access: record.as_ref(),
    };
    access::resolve(role, material, &mut Prompt::existing())?;

    let password_hash = (role == Role::Owner).then(|| project.password_hash.clone());
    Config::new(name, role, password_hash).save()?;
    config::ensure_gitignore()?;

    let records = store.current_secrets(name)?;
    if !records.is_empty() {
        env::sealed(&records).save(Path::new(constants::ENV_FILE))?;
    }
    info!(project = %name, role = %role, variables = records.len(), "project cloned");

    output::success(&format!("cloned {}", output::key(name)));
    output::kv("role", role);
    output::kv("variables", records.len());
    output::hint(&format!(
        "run with your variables: {}",
        output::cmd("envhub run <command>")
    ));

    Ok(())
}
