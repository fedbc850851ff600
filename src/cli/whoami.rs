//! Whoami command - print the current user.

use crate::cli::output;
use crate::core::identity;
use crate::error::Result;

/// Print the user name access records are keyed by.
pub fn execute() -> Result<()> {
    output::data(&identity::current_user());
    Ok(())
}
