//! Role type.
//!
//! A caller's relationship to a project, which decides how the project
//! password is recovered and what the caller may change.

use serde::{Deserialize, Serialize};

use crate::error::AccessError;

/// Project role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    /// Created the project; knows the project password directly.
    Owner,
    /// Recovers the project password through an access record; may write.
    Admin,
    /// Recovers the project password through an access record; read-only.
    Member,
}

impl Role {
    /// Lowercase name as stored on disk.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }

    /// Whether this role may publish new versions of the project's secrets.
    pub fn can_write(&self) -> bool {
        matches!(self, Self::Owner | Self::Admin)
    }

    /// Whether this role may grant and revoke access.
    pub fn can_grant(&self) -> bool {
        matches!(self, Self::Owner)
    }

    /// Fail with `AccessError::Forbidden` unless this role may write.
    pub fn require_write(&self) -> Result<(), AccessError> {
        if self.can_write() {
            Ok(())
        } else {
            Err(AccessError::Forbidden {
                role: self.as_str(),
                action: "modify secrets",
            })
        }
    }

    /// Fail with `AccessError::Forbidden` unless this role may grant.
    pub fn require_grant(&self) -> Result<(), AccessError> {
        if self.can_grant() {
            Ok(())
        } else {
            Err(AccessError::Forbidden {
                role: self.as_str(),
                action: "manage access",
            })
        }
    }
}

impl std::str::FromStr for Role {
    type Err = AccessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(Self::Owner),
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            other => Err(AccessError::UnknownRole(other.to_string())),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = AccessError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
