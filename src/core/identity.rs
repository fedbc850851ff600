//! Current user identity.
//!
//! The store keys access records by user name. The name comes from
//! `ENVHUB_USER` when set, otherwise from the OS login name.

use tracing::debug;

use crate::core::constants;

/// Name of the user running this command.
pub fn current_user() -> String {
    let user = std::env::var(constants::USER_ENV)
        .ok()
        .map(|u| u.trim().to_string())
        .filter(|u| !u.is_empty())
        .unwrap_or_else(whoami::username);
    debug!(user = %user, "resolved current user");
    user
}
