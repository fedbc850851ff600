//! Access record type.
//!
//! How a non-owner recovers the project password: the password sealed under
//! their personal access password, plus a hash of that access password.

use serde::{Deserialize, Serialize};

use crate::core::cipher::Envelope;
use crate::core::domain::Role;
use crate::core::password::PasswordHash;

/// Per-(project, user) access grant.
///
/// Never edited in place: re-granting replaces the record, revoking removes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessRecord {
    /// Role granted to the user.
    pub role: Role,
    /// Project password sealed under the user's access password.
    pub encrypted_project_password: Envelope,
    /// Hash of the user's access password.
    pub access_password_hash: PasswordHash,
}
