//! Filesystem-backed store.
//!
//! One JSON document per project at `<root>/<project>.json`, written
//! atomically and readable by the owner only on Unix.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{Project, Store};
use crate::core::domain::{AccessRecord, Role, SecretRecord, VersionInfo};
use crate::core::password::PasswordHash;
use crate::core::validation;
use crate::error::{Result, StoreError};

/// Local directory store.
#[derive(Debug, Clone)]
pub struct Filesystem {
    root: PathBuf,
}

#[derive(Debug, Serialize, Deserialize)]
struct Document {
    #[serde(flatten)]
    project: Project,
    #[serde(default)]
    versions: Vec<StoredVersion>,
    #[serde(default)]
    members: BTreeMap<String, AccessRecord>,
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredVersion {
    number: u32,
    created_at: DateTime<Utc>,
    secrets: Vec<SecretRecord>,
}

impl StoredVersion {
    fn info(&self) -> VersionInfo {
        VersionInfo {
            number: self.number,
            created_at: self.created_at,
            variables: self.secrets.len(),
        }
    }
}

impl Filesystem {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding project documents.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path(&self, project: &str) -> Result<PathBuf> {
        validation::validate_project_name(project)?;
        Ok(self.root.join(format!("{}.json", project)))
    }

    fn load(&self, project: &str) -> Result<Document> {
        let path = self.path(project)?;
        debug!(path = %path.display(), "loading project document");

        if !path.exists() {
            return Err(StoreError::ProjectNotFound(project.to_string()).into());
        }
        let contents = fs::read_to_string(&path).map_err(|source| StoreError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        let document: Document =
            serde_json::from_str(&contents).map_err(|source| StoreError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        debug!(
            versions = document.versions.len(),
            members = document.members.len(),
            "project document loaded"
        );
        Ok(document)
    }

    fn save(&self, document: &Document) -> Result<()> {
        let path = self.path(&document.project.name)?;
        let write_err = |source| StoreError::WriteFailed {
            path: path.display().to_string(),
            source,
        };

        fs::create_dir_all(&self.root).map_err(write_err)?;

        let contents = serde_json::to_string_pretty(document).map_err(|source| {
            StoreError::Parse {
                path: path.display().to_string(),
                source,
            }
        })?;

        let tmp = path.with_extension("json.tmp");
        write_private(&tmp, contents.as_bytes()).map_err(write_err)?;
        fs::rename(&tmp, &path).map_err(write_err)?;

        debug!(path = %path.display(), "project document saved");
        Ok(())
    }

    fn update<T>(&self, project: &str, f: impl FnOnce(&mut Document) -> Result<T>) -> Result<T> {
        let mut document = self.load(project)?;
        let out = f(&mut document)?;
        self.save(&document)?;
        Ok(out)
    }
}

#[cfg(unix)]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .create(true)
        .truncate(true)
        .write(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(contents)?;
    file.sync_all()?;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    fs::write(path, contents)
}

impl Store for Filesystem {
    fn create_project(
        &self,
        name: &str,
        owner: &str,
        password_hash: PasswordHash,
    ) -> Result<Project> {
        if self.path(name)?.exists() {
            return Err(StoreError::ProjectExists(name.to_string()).into());
        }

        let project = Project {
            name: name.to_string(),
            owner: owner.to_string(),
            password_hash,
            created_at: Utc::now(),
        };
        self.save(&Document {
            project: project.clone(),
            versions: Vec::new(),
            members: BTreeMap::new(),
        })?;

        debug!(project = %name, owner = %owner, "project created");
        Ok(project)
    }

    fn project(&self, name: &str) -> Result<Project> {
        Ok(self.load(name)?.project)
    }

    fn versions(&self, project: &str) -> Result<Vec<VersionInfo>> {
        Ok(self
            .load(project)?
            .versions
            .iter()
            .map(StoredVersion::info)
            .collect())
    }

    fn secrets(&self, project: &str, version: u32) -> Result<Vec<SecretRecord>> {
        let document = self.load(project)?;
        let Some(stored) = document.versions.into_iter().find(|v| v.number == version) else {
            warn!(project = %project, version, "version not found");
            return Ok(Vec::new());
        };
        let mut secrets = stored.secrets;
        secrets.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(secrets)
    }

    fn append_version(&self, project: &str, mut records: Vec<SecretRecord>) -> Result<VersionInfo> {
        records.sort_by(|a, b| a.name().cmp(b.name()));
        records.dedup_by(|a, b| a.name() == b.name());

        self.update(project, |document| {
            let number = document.versions.last().map_or(1, |v| v.number + 1);
            let stored = StoredVersion {
                number,
                created_at: Utc::now(),
                secrets: records,
            };
            let info = stored.info();
            document.versions.push(stored);
            debug!(project = %project, version = number, "version appended");
            Ok(info)
        })
    }

    fn access(&self, project: &str, user: &str) -> Result<Option<AccessRecord>> {
        Ok(self.load(project)?.members.remove(user))
    }

    fn put_access(&self, project: &str, user: &str, record: AccessRecord) -> Result<()> {
        self.update(project, |document| {
            document.members.insert(user.to_string(), record);
            Ok(())
        })
    }

    fn revoke_access(&self, project: &str, user: &str) -> Result<bool> {
        self.update(project, |document| Ok(document.members.remove(user).is_some()))
    }

    fn members(&self, project: &str) -> Result<Vec<(String, Role)>> {
        Ok(self
            .load(project)?
            .members
            .into_iter()
            .map(|(user, record)| (user, record.role))
            .collect())
    }
}
