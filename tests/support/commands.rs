//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

impl Test {
    /// Create an envhub command with correct environment variables.
    ///
    /// Returns a Command configured with:
    /// - HOME and ENVHUB_HOME pointing into the temporary home directory
    /// - ENVHUB_USER and ENVHUB_PASSWORD for this test user
    /// - Current directory set to the test project directory
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("envhub").expect("failed to find envhub binary");
        cmd.env("HOME", self.home.path());
        // Windows uses USERPROFILE instead of HOME for home directory
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("ENVHUB_HOME", self.envhub_home());
        cmd.env("ENVHUB_USER", &self.user);
        cmd.env("ENVHUB_PASSWORD", &self.password);
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("ENVHUB_LOG");
        cmd.env_remove("ENVHUB_ACCESS_PASSWORD");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// Shortcut for `envhub init` command.
    pub fn init_cmd(&self, name: &str) -> Output {
        self.cmd()
            .args(["init", name])
            .output()
            .expect("failed to run envhub init")
    }

    /// Shortcut for `envhub clone` command.
    pub fn clone_cmd(&self, name: &str) -> Output {
        self.cmd()
            .args(["clone", name])
            .output()
            .expect("failed to run envhub clone")
    }

    /// Shortcut for `envhub reset` command.
    pub fn reset(&self) -> Output {
        self.cmd()
            .arg("reset")
            .output()
            .expect("failed to run envhub reset")
    }

    /// Shortcut for `envhub add` command.
    pub fn add(&self, key: &str, val: &str) -> Output {
        self.cmd()
            .args(["add", key, val])
            .output()
            .expect("failed to run envhub add")
    }

    /// Shortcut for `envhub rm` command.
    pub fn rm(&self, key: &str) -> Output {
        self.cmd()
            .args(["rm", key])
            .output()
            .expect("failed to run envhub rm")
    }

    /// Shortcut for `envhub list` command.
    pub fn list(&self) -> Output {
        self.cmd()
            .arg("list")
            .output()
            .expect("failed to run envhub list")
    }

    /// Shortcut for `envhub list --json` command.
    pub fn list_json(&self) -> Output {
        self.cmd()
            .args(["list", "--json"])
            .output()
            .expect("failed to run envhub list --json")
    }

    /// Shortcut for `envhub export` command.
    pub fn export(&self) -> Output {
        self.cmd()
            .arg("export")
            .output()
            .expect("failed to run envhub export")
    }

    /// Shortcut for `envhub decrypt [path]` command.
    pub fn decrypt(&self, path: Option<&str>) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("decrypt");
        if let Some(path) = path {
            cmd.arg(path);
        }
        cmd.output().expect("failed to run envhub decrypt")
    }

    /// Shortcut for `envhub versions` command.
    pub fn versions(&self) -> Output {
        self.cmd()
            .arg("versions")
            .output()
            .expect("failed to run envhub versions")
    }

    /// Shortcut for `envhub grant` command with the access password in the environment.
    pub fn grant(&self, user: &str, role: &str, access_password: &str) -> Output {
        self.cmd()
            .args(["grant", user, "--role", role])
            .env("ENVHUB_ACCESS_PASSWORD", access_password)
            .output()
            .expect("failed to run envhub grant")
    }

    /// Shortcut for `envhub revoke` command.
    pub fn revoke(&self, user: &str) -> Output {
        self.cmd()
            .args(["revoke", user])
            .output()
            .expect("failed to run envhub revoke")
    }

    /// Shortcut for `envhub members --json` command.
    pub fn members_json(&self) -> Output {
        self.cmd()
            .args(["members", "--json"])
            .output()
            .expect("failed to run envhub members --json")
    }

    /// Shortcut for `envhub run` command.
    pub fn run(&self, command: &[&str]) -> Output {
        let mut cmd = self.cmd();
        cmd.arg("run").arg("--");
        for arg in command {
            cmd.arg(arg);
        }
        cmd.output().expect("failed to run envhub run")
    }
}
