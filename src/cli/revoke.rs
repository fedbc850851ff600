//! Revoke command.

use tracing::info;

use crate::cli::output;
use crate::cli::session::Session;
use crate::error::{Result, StoreError};

/// Remove the access record of `user`.
pub fn execute(user: &str) -> Result<()> {
    let session = Session::open()?;
    session.role.require_grant()?;

    if !session.store.revoke_access(session.project(), user)? {
        return Err(StoreError::NoAccess {
            project: session.project().to_string(),
            user: user.to_string(),
        }
        .into());
    }
    info!(project = %session.project(), user = %user, "access revoked");

    output::success(&format!("revoked access for {}", output::key(user)));
    Ok(())
}
