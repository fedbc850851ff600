//! Grant command.
//!
//! Seals the project password under a new access password for a
//! collaborator. The access password is shared out of band.

use tracing::info;

use crate::cli::output;
use crate::cli::prompt::Prompt;
use crate::cli::session::Session;
use crate::core::access::{self, PasswordSource};
use crate::core::domain::Role;
use crate::error::Result;

/// Grant `user` access with `role`.
pub fn execute(user: &str, role: Role) -> Result<()> {
    let session = Session::open()?;
    session.role.require_grant()?;

    let access_password =
        Prompt::access_password().password(&format!("Access password for {}", user))?;
    let record = access::grant(session.password(), &access_password, role)?;
    session.store.put_access(session.project(), user, record)?;
    info!(project = %session.project(), user = %user, role = %role, "access granted");

    output::success(&format!("granted {} access to {}", role, output::key(user)));
    output::hint(&format!(
        "share the access password, then they run: {}",
        output::cmd(&format!("envhub clone {}", session.project()))
    ));

    Ok(())
}
