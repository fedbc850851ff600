//! Error types.
//!
//! One enum per concern, collected into [`Error`] so every layer can use `?`.

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Run(#[from] RunError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Dialog(#[from] dialoguer::Error),
}

impl Error {
    /// Process exit code reserved for internal failures.
    ///
    /// Child exit codes are propagated separately by `run`.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// Envelope encryption and decryption errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The AEAD tag did not verify: wrong password or modified ciphertext.
    #[error("decryption failed: wrong password or corrupted data")]
    Authentication,

    #[error("decrypted value is not valid UTF-8")]
    Encoding,

    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),
}

/// Errors while resolving the project password for a role.
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("incorrect {0}")]
    PasswordMismatch(&'static str),

    #[error("unknown role: {0}")]
    UnknownRole(String),

    #[error("no {field} available for role {role}")]
    MissingMaterial {
        role: &'static str,
        field: &'static str,
    },

    #[error("role {role} cannot {action}")]
    Forbidden {
        role: &'static str,
        action: &'static str,
    },

    #[error("cannot grant access: {0}")]
    InvalidGrant(String),

    #[error("cannot unwrap project password: {0}")]
    Unwrap(#[source] CipherError),
}

/// Configuration file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not initialized: no .envhub.toml in this directory")]
    NotInitialized,

    #[error("already initialized: .envhub.toml exists")]
    AlreadyInitialized,

    #[error("refusing to overwrite existing .env")]
    EnvFileExists,

    #[error("failed to read .envhub.toml: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("invalid .envhub.toml: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to write .envhub.toml: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("missing field in .envhub.toml: {field}")]
    MissingField { field: &'static str },

    #[error("invalid {field} in .envhub.toml: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Secret store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("project not found: {0}")]
    ProjectNotFound(String),

    #[error("project already exists: {0}")]
    ProjectExists(String),

    #[error("{user} has no access to project {project}")]
    NoAccess { project: String, user: String },

    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("failed to read store document {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write store document {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("corrupt store document {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors from the run-a-command pipeline.
#[derive(Error, Debug)]
pub enum RunError {
    #[error("no command specified")]
    EmptyCommand,

    #[error("cannot parse command: {0}")]
    Tokenize(String),

    #[error("cannot decrypt {name}: {source}")]
    Bootstrap {
        name: String,
        #[source]
        source: CipherError,
    },

    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("variable name cannot be empty")]
    EmptyKey,

    #[error("invalid variable name '{key}': {reason}")]
    InvalidKey { key: String, reason: String },

    #[error("value for {0} cannot be empty")]
    EmptyValue(String),

    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("variable not found: {0}")]
    KeyNotFound(String),

    #[error("password cannot be empty")]
    EmptyPassword,
}

pub type Result<T> = std::result::Result<T, Error>;
