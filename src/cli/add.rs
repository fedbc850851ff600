//! Add command.
//!
//! Sets a variable and publishes a new version. Without a value on the
//! command line the value is read with hidden input.

use std::io::{self, IsTerminal};

use dialoguer::Password;
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::prompt;
use crate::cli::session::Session;
use crate::core::{injector, validation};
use crate::error::Result;

/// Add or overwrite a variable.
pub fn execute(key: &str, value: Option<String>) -> Result<()> {
    validation::validate_key(key)?;

    let session = Session::open()?;
    session.role.require_write()?;

    let value = match value {
        Some(value) => Zeroizing::new(value),
        None if io::stdin().is_terminal() => Zeroizing::new(
            Password::new()
                .with_prompt(format!("Value for {}", output::key(key)))
                .interact()?,
        ),
        None => prompt::read_line()?,
    };
    validation::validate_value(key, &value)?;

    let mut values = injector::decrypt_strict(&session.current_secrets()?, session.password())?;
    let replaced = values.insert(key.to_string(), value).is_some();

    let version = session.publish(&values)?;
    info!(key = %key, version = version.number, "variable set");

    let verb = if replaced { "updated" } else { "added" };
    output::success(&format!(
        "{} {} (v{})",
        verb,
        output::key(key),
        version.number
    ));

    Ok(())
}
