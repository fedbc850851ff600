//! Test support utilities for envhub integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// Each test gets its own project dir and home dir. Collaborators made with
/// [`Test::as_user`] share the home (and so the store) but get their own
/// project dir. No process-global state is mutated; child processes use
/// `.current_dir()` and explicit env vars so tests can run in parallel.
pub struct Test {
    /// Temporary directory for the project checkout
    pub dir: TempDir,
    /// Temporary home directory holding the store
    pub home: Arc<TempDir>,
    /// Value of `ENVHUB_USER`
    pub user: String,
    /// Value of `ENVHUB_PASSWORD`
    pub password: String,
}

impl Test {
    /// Create a new empty test environment for the owner.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");

        Self {
            dir,
            home: Arc::new(home),
            user: OWNER.to_string(),
            password: PROJECT_PASSWORD.to_string(),
        }
    }

    /// Create a test environment with a project initialized.
    pub fn init(name: &str) -> Self {
        let t = Self::new();
        let output = t.init_cmd(name);
        assert!(
            output.status.success(),
            "Failed to initialize project: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create a test environment with a project initialized and variables set.
    pub fn with_secrets(name: &str, secrets: &[(&str, &str)]) -> Self {
        let t = Self::init(name);
        for (k, v) in secrets {
            let output = t.add(k, v);
            assert!(
                output.status.success(),
                "Failed to add {}: {}",
                k,
                String::from_utf8_lossy(&output.stderr)
            );
        }
        t
    }

    /// Another user sharing this store, in a fresh project dir.
    pub fn as_user(&self, user: &str, password: &str) -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
            home: Arc::clone(&self.home),
            user: user.to_string(),
            password: password.to_string(),
        }
    }

    /// Path of a file in the project dir.
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Read a file from the project dir.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("failed to read file")
    }

    /// Store root shared by every user of this environment.
    pub fn envhub_home(&self) -> PathBuf {
        self.home.path().join(".envhub")
    }

    /// Path of a project's store document.
    pub fn store_document(&self, project: &str) -> PathBuf {
        self.envhub_home()
            .join("store")
            .join(format!("{}.json", project))
    }
}
