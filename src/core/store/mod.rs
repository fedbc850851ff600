//! Secret store.
//!
//! The store holds projects, their versioned secret records and the access
//! records of collaborators. It only ever sees ciphertext and password hashes.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Store` trait
//! 2. Add the implementation in a new file (e.g., `http.rs`)
//! 3. Select it in `default_backend`

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::core::domain::{AccessRecord, Role, SecretRecord, VersionInfo};
use crate::core::password::PasswordHash;
use crate::error::{Result, StoreError};

mod fs;

pub use fs::Filesystem;

/// A project as known to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    /// User who created the project.
    pub owner: String,
    /// Hash of the project password.
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

/// Secret store trait.
///
/// Every method is keyed by project name; backends decide how that maps to
/// storage.
pub trait Store {
    /// Create a project owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ProjectExists` if the name is taken.
    fn create_project(&self, name: &str, owner: &str, password_hash: PasswordHash)
        -> Result<Project>;

    /// Look a project up by name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ProjectNotFound` if there is no such project.
    fn project(&self, name: &str) -> Result<Project>;

    /// All published versions, oldest first.
    fn versions(&self, project: &str) -> Result<Vec<VersionInfo>>;

    /// Secret records of one version, ordered by name.
    fn secrets(&self, project: &str, version: u32) -> Result<Vec<SecretRecord>>;

    /// Publish a new version containing exactly `records`.
    fn append_version(&self, project: &str, records: Vec<SecretRecord>) -> Result<VersionInfo>;

    /// The access record of `user`, if any.
    fn access(&self, project: &str, user: &str) -> Result<Option<AccessRecord>>;

    /// Store `record` for `user`, replacing any previous record.
    fn put_access(&self, project: &str, user: &str, record: AccessRecord) -> Result<()>;

    /// Remove the access record of `user`. Returns whether one existed.
    fn revoke_access(&self, project: &str, user: &str) -> Result<bool>;

    /// Users holding access records, with their roles.
    fn members(&self, project: &str) -> Result<Vec<(String, Role)>>;

    /// Most recent version, if any has been published.
    fn latest_version(&self, project: &str) -> Result<Option<VersionInfo>> {
        Ok(self.versions(project)?.pop())
    }

    /// Records of the most recent version; empty before the first publish.
    fn current_secrets(&self, project: &str) -> Result<Vec<SecretRecord>> {
        match self.latest_version(project)? {
            Some(version) => self.secrets(project, version.number),
            None => Ok(Vec::new()),
        }
    }
}

/// Root directory of local envhub state.
///
/// `ENVHUB_HOME` when set, otherwise `~/.envhub`.
///
/// # Errors
///
/// Returns `StoreError::NoHomeDir` if neither is available.
pub fn home_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(constants::HOME_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
    Ok(home.join(constants::HOME_DIR))
}

/// The store used by the CLI.
///
/// # Errors
///
/// Returns `StoreError::NoHomeDir` if the store location cannot be determined.
pub fn default_backend() -> Result<Box<dyn Store>> {
    let root = home_dir()?.join(constants::STORE_DIR);
    debug!(root = %root.display(), "using filesystem store");
    Ok(Box::new(Filesystem::new(root)))
}
