//! Constants used throughout envhub.
//!
//! Centralizes file names, environment variables, and cryptographic parameters.

/// Project configuration file name (.envhub.toml).
pub const CONFIG_FILE: &str = ".envhub.toml";

/// Environment variables file name (.env).
pub const ENV_FILE: &str = ".env";

/// Home-relative directory holding envhub state (~/.envhub).
pub const HOME_DIR: &str = ".envhub";

/// Store directory below the envhub home.
pub const STORE_DIR: &str = "store";

/// Overrides the envhub home directory.
pub const HOME_ENV: &str = "ENVHUB_HOME";

/// Overrides the current user identity.
pub const USER_ENV: &str = "ENVHUB_USER";

/// Supplies a password non-interactively.
pub const PASSWORD_ENV: &str = "ENVHUB_PASSWORD";

/// Log filter directive.
pub const LOG_ENV: &str = "ENVHUB_LOG";

/// Gitignore entries to protect secrets and the per-user link file.
pub const GITIGNORE_ENTRIES: &[&str] = &[CONFIG_FILE, ".env", ".env.*", "!.env.example"];

/// PBKDF2-HMAC-SHA256 rounds for both key derivation and password hashing.
pub const KDF_ROUNDS: u32 = 100_000;

/// Salt length in bytes.
pub const SALT_LEN: usize = 16;

/// AES-GCM nonce length in bytes.
pub const NONCE_LEN: usize = 12;

/// AES-GCM tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Derived key and password hash length in bytes.
pub const KEY_LEN: usize = 32;

/// Supplies the new access password for `grant` non-interactively.
pub const ACCESS_PASSWORD_ENV: &str = "ENVHUB_ACCESS_PASSWORD";
