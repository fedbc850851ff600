//! Unlocked project session.
//!
//! Loads `.envhub.toml`, finds the caller's material in the store and
//! resolves the project password once for the whole command.

use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::prompt::Prompt;
use crate::core::access::{self, AccessMaterial};
use crate::core::config::Config;
use crate::core::domain::{Role, SecretRecord, VersionInfo};
use crate::core::identity;
use crate::core::injector::Resolved;
use crate::core::store::{self, Store};
use crate::error::{Result, StoreError};

/// A linked directory with the project password resolved.
pub struct Session {
    pub config: Config,
    pub store: Box<dyn Store>,
    pub user: String,
    /// Effective role. For collaborators this is the role in their access
    /// record, which wins over the role written at clone time.
    pub role: Role,
    password: Zeroizing<String>,
}

impl Session {
    /// Open the project linked to the current directory.
    ///
    /// # Errors
    ///
    /// Fails if the directory is not linked, the project or the caller's
    /// access record is missing, or the password does not verify.
    pub fn open() -> Result<Self> {
        let config = Config::load()?;
        let store = store::default_backend()?;
        let user = identity::current_user();
        let name = config.project.name.clone();

        store.project(&name)?;

        let record = match config.project.role {
            Role::Owner => None,
            Role::Admin | Role::Member => Some(store.access(&name, &user)?.ok_or_else(|| {
                StoreError::NoAccess {
                    project: name.clone(),
                    user: user.clone(),
                }
            })?),
        };

        let material = AccessMaterial {
            access: record.as_ref(),
            ..config.material()
        };
        let password = access::resolve(config.project.role, material, &mut Prompt::existing())?;
        let role = record.map_or(config.project.role, |r| r.role);
        debug!(project = %name, user = %user, role = %role, "session unlocked");

        Ok(Self {
            config,
            store,
            user,
            role,
            password,
        })
    }

    /// Project name.
    pub fn project(&self) -> &str {
        &self.config.project.name
    }

    /// Resolved project password.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Records of the latest version.
    pub fn current_secrets(&self) -> Result<Vec<SecretRecord>> {
        self.store.current_secrets(self.project())
    }

    /// Re-seal every value with fresh salt and nonce and publish a new version.
    pub fn publish(&self, values: &Resolved) -> Result<VersionInfo> {
        let records = values
            .iter()
            .map(|(name, value)| SecretRecord::seal(name, value, self.password()))
            .collect::<Result<Vec<_>>>()?;
        self.store.append_version(self.project(), records)
    }
}
