//! Configuration file management.
//!
//! Handles reading, writing, and validating `.envhub.toml` configuration files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::access::AccessMaterial;
use crate::core::constants;
use crate::core::domain::Role;
use crate::core::password::PasswordHash;
use crate::core::validation;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `.envhub.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Metadata about the configuration file
    pub envhub: Meta,
    /// The linked project and the caller's role in it
    pub project: ProjectConfig,
}

/// Metadata section of the configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Configuration version
    pub version: String,
}

/// Project section of the configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project name in the store
    pub name: String,
    /// Role of the user who linked this directory
    pub role: Role,
    /// Hash of the project password, kept for owners so a wrong password is
    /// rejected before the store is touched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_hash: Option<PasswordHash>,
}

impl Config {
    /// Create a configuration for `name` with the current tool version
    pub fn new(name: impl Into<String>, role: Role, password_hash: Option<PasswordHash>) -> Self {
        Self {
            envhub: Meta {
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            project: ProjectConfig {
                name: name.into(),
                role,
                password_hash,
            },
        }
    }

    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Check if a configuration file exists in the current directory
    pub fn exists() -> bool {
        Self::config_path().exists()
    }

    /// Load configuration from `.envhub.toml` in the current directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration from `.envhub.toml` in `dir`
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(constants::CONFIG_FILE);
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotInitialized.into());
        }
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(
            project = %config.project.name,
            role = %config.project.role,
            "config loaded"
        );

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to `.envhub.toml` in the current directory
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save(&self) -> Result<()> {
        self.save_to(Path::new("."))
    }

    /// Save configuration to `.envhub.toml` in `dir`
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save_to(&self, dir: &Path) -> Result<()> {
        debug!("saving config");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(dir.join(constants::CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Material the access resolver reads from this file.
    pub fn material(&self) -> AccessMaterial<'_> {
        AccessMaterial {
            password_hash: self.project.password_hash.as_ref(),
            access: None,
        }
    }

    /// Validate the configuration structure and contents
    ///
    /// Checks:
    /// - Version field looks like semver
    /// - Project name is usable as a store key
    /// - Owners carry a password hash
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` or `ConfigError::MissingField` on validation failure.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        if self.envhub.version.is_empty() {
            return Err(ConfigError::MissingField { field: "version" }.into());
        }

        if self.envhub.version.split('.').count() < 2 {
            return Err(ConfigError::InvalidValue {
                field: "version",
                reason: format!("not a valid semver: {}", self.envhub.version),
            }
            .into());
        }

        validation::validate_project_name(&self.project.name).map_err(|e| {
            ConfigError::InvalidValue {
                field: "project.name",
                reason: e.to_string(),
            }
        })?;

        if self.project.role == Role::Owner && self.project.password_hash.is_none() {
            return Err(ConfigError::MissingField {
                field: "project.password_hash",
            }
            .into());
        }

        Ok(())
    }
}

/// Ensure `.gitignore` in the current directory ignores `.env` files and
/// `.envhub.toml`
///
/// # Errors
///
/// Returns error if file operations fail.
pub fn ensure_gitignore() -> Result<()> {
    ensure_gitignore_in(Path::new("."))
}

/// Ensure `.gitignore` in `dir` ignores the link file and `.env` files
///
/// Adds `.envhub.toml`, `.env`, `.env.*`, and `!.env.example` if not already
/// present.
///
/// # Errors
///
/// Returns error if file operations fail.
pub fn ensure_gitignore_in(dir: &Path) -> Result<()> {
    let gitignore = dir.join(".gitignore");

    let existing = if gitignore.exists() {
        std::fs::read_to_string(&gitignore)?
    } else {
        String::new()
    };

    let mut updated = existing.clone();
    for entry in constants::GITIGNORE_ENTRIES {
        if !existing.lines().any(|l| l.trim() == *entry) {
            if !updated.is_empty() && !updated.ends_with('\n') {
                updated.push('\n');
            }
            updated.push_str(entry);
            updated.push('\n');
        }
    }

    if updated != existing {
        debug!(path = %gitignore.display(), "updating gitignore");
        std::fs::write(&gitignore, updated)?;
    }

    Ok(())
}
