//! Rm command.

use tracing::info;

use crate::cli::output;
use crate::cli::session::Session;
use crate::core::injector;
use crate::error::{Result, ValidationError};

/// Remove a variable and publish a new version.
pub fn execute(key: &str) -> Result<()> {
    let session = Session::open()?;
    session.role.require_write()?;

    let mut values = injector::decrypt_strict(&session.current_secrets()?, session.password())?;
    if values.remove(key).is_none() {
        return Err(ValidationError::KeyNotFound(key.to_string()).into());
    }

    let version = session.publish(&values)?;
    info!(key = %key, version = version.number, "variable removed");

    output::success(&format!("removed {} (v{})", output::key(key), version.number));
    Ok(())
}
