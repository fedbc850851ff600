//! Command-line interface.

pub mod add;
pub mod clone;
pub mod completions;
pub mod decrypt;
pub mod export;
pub mod grant;
pub mod init;
pub mod list;
pub mod members;
pub mod output;
pub mod prompt;
pub mod reset;
pub mod revoke;
pub mod rm;
pub mod run;
pub mod session;
pub mod versions;
pub mod whoami;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::domain::Role;
use crate::error::{ConfigError, Error, Result, StoreError};

/// envhub - share encrypted environment variables with your team.
#[derive(Parser)]
#[command(
    name = "envhub",
    about = "Share encrypted environment variables with your team",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a project and link the current directory as its owner
    Init {
        /// Project name
        name: String,
    },

    /// Link the current directory to an existing project
    #[command(name = "clone")]
    Link {
        /// Project name
        name: String,
    },

    /// Unlink the current directory from its project
    Reset,

    /// Set a variable (owner and admin)
    Add {
        /// Variable name (e.g., DATABASE_URL)
        key: String,
        /// Value; read with hidden input when omitted
        value: Option<String>,
    },

    /// Remove a variable (owner and admin)
    Rm {
        /// Variable name
        key: String,
    },

    /// List variable names
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print decrypted variables in .env format
    Export,

    /// Decrypt a .env file of sealed values
    Decrypt {
        /// Path to the .env file (default: .env)
        path: Option<PathBuf>,
    },

    /// Run a command with variables injected as env vars
    Run {
        /// Command and arguments to run
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, required = true)]
        command: Vec<String>,
    },

    /// Give a user access to the project (owner)
    Grant {
        /// User name
        user: String,
        /// Role to grant: admin or member
        #[arg(long, default_value = "member")]
        role: Role,
    },

    /// Remove a user's access (owner)
    Revoke {
        /// User name
        user: String,
    },

    /// List the owner and collaborators
    Members {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List published versions
    Versions,

    /// Print the current user
    Whoami,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command and return the process exit code.
///
/// Every command but `run` exits 0 on success; `run` mirrors its child.
pub fn execute(command: Command) -> Result<i32> {
    use Command::*;

    match command {
        Init { name } => init::execute(&name)?,
        Link { name } => clone::execute(&name)?,
        Reset => reset::execute()?,
        Add { key, value } => add::execute(&key, value)?,
        Rm { key } => rm::execute(&key)?,
        List { json } => list::execute(json)?,
        Export => export::execute()?,
        Decrypt { path } => decrypt::execute(path)?,
        Run { command } => return run::execute(&command),
        Grant { user, role } => grant::execute(&user, role)?,
        Revoke { user } => revoke::execute(&user)?,
        Members { json } => members::execute(json)?,
        Versions => versions::execute()?,
        Whoami => whoami::execute()?,
        Completions { shell } => completions::execute(shell)?,
    }

    Ok(0)
}

/// Follow-up suggestion for a fatal error, if one applies.
pub fn hint(err: &Error) -> Option<String> {
    match err {
        Error::Config(ConfigError::NotInitialized) => {
            Some("run: envhub init <name> or envhub clone <name>".to_string())
        }
        Error::Config(ConfigError::AlreadyInitialized) => {
            Some("unlink it first with: envhub reset".to_string())
        }
        Error::Config(ConfigError::EnvFileExists) => {
            Some("move .env aside, or run: envhub reset if envhub wrote it".to_string())
        }
        Error::Store(StoreError::ProjectNotFound(name)) => {
            Some(format!("run: envhub init {}", name))
        }
        Error::Store(StoreError::NoAccess { user, .. }) => Some(format!(
            "ask the project owner to run: envhub grant {}",
            user
        )),
        _ => None,
    }
}
