//! Run command.
//!
//! Executes a command with decrypted variables injected as environment
//! variables and returns its exit code.

use crate::cli::session::Session;
use crate::core::injector;
use crate::error::Result;

/// Run a command with the latest version injected.
pub fn execute(command: &[String]) -> Result<i32> {
    injector::tokenize(command)?;

    let session = Session::open()?;
    let records = session.current_secrets()?;
    Ok(injector::run(&records, session.password(), command)?)
}
