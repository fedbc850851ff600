//! Version summary type.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Summary of one published version of a project's variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    /// 1-based, strictly increasing per project.
    pub number: u32,
    pub created_at: DateTime<Utc>,
    /// Number of variables in the version.
    pub variables: usize,
}

impl std::fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "v{}  {}  {} variables",
            self.number,
            self.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
            self.variables
        )
    }
}
