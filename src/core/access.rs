//! Role-based recovery of the project password.
//!
//! Owners type the project password itself, checked against its stored hash.
//! Admins and members type a personal access password: it is checked against
//! the access record's hash and then used to unwrap the project password
//! sealed in that record. The role alone picks the branch; material for the
//! other branch is ignored.

use tracing::debug;
use zeroize::Zeroizing;

use crate::core::cipher;
use crate::core::domain::{AccessRecord, Role};
use crate::core::password::{self, PasswordHash};
use crate::core::validation;
use crate::error::{AccessError, Result};

/// Where passwords come from.
///
/// The CLI prompts the terminal; tests hand in fixed strings.
pub trait PasswordSource {
    /// Produce a password for the given prompt label.
    ///
    /// # Errors
    ///
    /// Returns an error if the password cannot be read.
    fn password(&mut self, prompt: &str) -> Result<Zeroizing<String>>;
}

/// A password known up front.
pub struct Fixed(pub Zeroizing<String>);

impl Fixed {
    pub fn new(password: &str) -> Self {
        Self(Zeroizing::new(password.to_string()))
    }
}

impl PasswordSource for Fixed {
    fn password(&mut self, _prompt: &str) -> Result<Zeroizing<String>> {
        Ok(self.0.clone())
    }
}

/// Stored material available to the resolver.
#[derive(Debug, Default, Clone, Copy)]
pub struct AccessMaterial<'a> {
    /// Hash of the project password (owner branch).
    pub password_hash: Option<&'a PasswordHash>,
    /// The caller's access record (admin/member branch).
    pub access: Option<&'a AccessRecord>,
}

/// Recover the plaintext project password for a role.
///
/// # Errors
///
/// - `AccessError::MissingMaterial` if the branch's material is absent.
/// - `AccessError::PasswordMismatch` if the typed password does not verify.
/// - `AccessError::Unwrap` if a verified access password cannot open the record.
pub fn resolve(
    role: Role,
    material: AccessMaterial<'_>,
    source: &mut dyn PasswordSource,
) -> Result<Zeroizing<String>> {
    debug!(role = %role, "resolving project password");

    match role {
        Role::Owner => {
            let hash = material.password_hash.ok_or(AccessError::MissingMaterial {
                role: role.as_str(),
                field: "project password hash",
            })?;
            let entered = source.password("Project password")?;
            if !password::verify_password(&entered, hash) {
                return Err(AccessError::PasswordMismatch("project password").into());
            }
            Ok(entered)
        }
        Role::Admin | Role::Member => {
            let record = material.access.ok_or(AccessError::MissingMaterial {
                role: role.as_str(),
                field: "access record",
            })?;
            let entered = source.password("Access password")?;
            unwrap_access(record, &entered)
        }
    }
}

/// Open an access record with the user's access password.
///
/// # Errors
///
/// Returns `AccessError::PasswordMismatch` if the access password does not
/// match the record's hash, or `AccessError::Unwrap` if the sealed project
/// password cannot be decrypted.
pub fn unwrap_access(record: &AccessRecord, access_password: &str) -> Result<Zeroizing<String>> {
    if !password::verify_password(access_password, &record.access_password_hash) {
        return Err(AccessError::PasswordMismatch("access password").into());
    }
    let project_password = cipher::decrypt(&record.encrypted_project_password, access_password)
        .map_err(AccessError::Unwrap)?;
    debug!("project password unwrapped from access record");
    Ok(Zeroizing::new(project_password))
}

/// Build the access record an owner hands to a collaborator.
///
/// # Errors
///
/// Returns `AccessError::InvalidGrant` when granting the owner role, and
/// `ValidationError::EmptyPassword` for an empty access password.
pub fn grant(project_password: &str, access_password: &str, role: Role) -> Result<AccessRecord> {
    if role == Role::Owner {
        return Err(AccessError::InvalidGrant("the owner role cannot be granted".to_string()).into());
    }
    validation::validate_password(access_password)?;

    Ok(AccessRecord {
        role,
        encrypted_project_password: cipher::encrypt(project_password, access_password)?,
        access_password_hash: password::hash_password(access_password),
    })
}
