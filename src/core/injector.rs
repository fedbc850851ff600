//! Decrypting secret batches and launching commands with them.
//!
//! Two decryption passes share the same loop but differ on failure:
//!
//! - [`decrypt_lenient`] is for reads and exports. A record that fails is
//!   logged by name and skipped.
//! - [`decrypt_strict`] is the bootstrap for `run`. The first failure aborts
//!   before any child process exists.
//!
//! The child's environment is an explicit map built from a snapshot of the
//! inherited environment plus the decrypted values. The current process
//! environment is never modified.

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::process::{Command, ExitStatus};

use tracing::{debug, warn};
use zeroize::Zeroizing;

use crate::core::domain::SecretRecord;
use crate::error::{CipherError, RunError};

/// Decrypted name/value pairs, ordered by name.
pub type Resolved = BTreeMap<String, Zeroizing<String>>;

/// A record left out of a lenient pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub name: String,
    pub error: CipherError,
}

/// Outcome of a lenient pass.
#[derive(Debug, Default)]
pub struct Batch {
    pub values: Resolved,
    pub skipped: Vec<Skipped>,
}

/// Decrypt every record, skipping the ones that fail.
pub fn decrypt_lenient(records: &[SecretRecord], password: &str) -> Batch {
    let mut batch = Batch::default();
    for record in records {
        match record.open(password) {
            Ok(value) => {
                batch
                    .values
                    .insert(record.name().to_string(), Zeroizing::new(value));
            }
            Err(error) => {
                warn!(name = record.name(), error = %error, "skipping variable");
                batch.skipped.push(Skipped {
                    name: record.name().to_string(),
                    error,
                });
            }
        }
    }
    debug!(
        decrypted = batch.values.len(),
        skipped = batch.skipped.len(),
        "lenient decryption done"
    );
    batch
}

/// Decrypt every record or fail on the first one that cannot be opened.
///
/// # Errors
///
/// Returns `RunError::Bootstrap` naming the failing record.
pub fn decrypt_strict(records: &[SecretRecord], password: &str) -> Result<Resolved, RunError> {
    let mut values = Resolved::new();
    for record in records {
        let value = record.open(password).map_err(|source| RunError::Bootstrap {
            name: record.name().to_string(),
            source,
        })?;
        values.insert(record.name().to_string(), Zeroizing::new(value));
    }
    debug!(decrypted = values.len(), "strict decryption done");
    Ok(values)
}

/// Merge decrypted values over an inherited environment.
///
/// Keys are added or overridden, never removed.
pub fn merge_env<I>(inherited: I, resolved: &Resolved) -> BTreeMap<OsString, OsString>
where
    I: IntoIterator<Item = (OsString, OsString)>,
{
    let mut merged: BTreeMap<OsString, OsString> = inherited.into_iter().collect();
    for (key, value) in resolved {
        merged.insert(OsString::from(key), OsString::from(value.as_str()));
    }
    merged
}

/// Turn the user's command into argv.
///
/// A single argument is split with POSIX shell quoting rules, so
/// `run "node server.js --port 3000"` works. Several arguments are taken as
/// already tokenized. No shell is ever involved.
///
/// # Errors
///
/// Returns `RunError::EmptyCommand` for an empty command, or
/// `RunError::Tokenize` for unbalanced quotes.
pub fn tokenize(command: &[String]) -> Result<Vec<String>, RunError> {
    let argv = match command {
        [] => return Err(RunError::EmptyCommand),
        [single] => shlex::split(single)
            .ok_or_else(|| RunError::Tokenize(format!("unbalanced quotes in '{}'", single)))?,
        many => many.to_vec(),
    };
    if argv.is_empty() {
        return Err(RunError::EmptyCommand);
    }
    Ok(argv)
}

/// Spawn `argv` with exactly `env`, wait, and return its exit code.
///
/// # Errors
///
/// Returns `RunError::Launch` if the program cannot be started.
pub fn launch(argv: &[String], env: &BTreeMap<OsString, OsString>) -> Result<i32, RunError> {
    let (program, args) = argv.split_first().ok_or(RunError::EmptyCommand)?;
    debug!(program = %program, args = args.len(), "launching");

    let status = Command::new(program)
        .args(args)
        .env_clear()
        .envs(env)
        .status()
        .map_err(|source| RunError::Launch {
            program: program.clone(),
            source,
        })?;

    let code = exit_code(status);
    debug!(code, "child exited");
    Ok(code)
}

/// Full run pipeline: strict bootstrap, merge, launch.
///
/// # Errors
///
/// Returns `RunError` if any record fails to decrypt (nothing is launched),
/// the command is empty, or the program cannot be started.
pub fn run(records: &[SecretRecord], password: &str, command: &[String]) -> Result<i32, RunError> {
    let argv = tokenize(command)?;
    let resolved = decrypt_strict(records, password)?;
    let env = merge_env(std::env::vars_os(), &resolved);
    launch(&argv, &env)
}

/// Exit code of a finished child; `128 + signal` when killed by a signal.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
