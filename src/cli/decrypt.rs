//! Decrypt command.
//!
//! Opens a `.env` file whose values are colon-delimited envelopes and prints
//! the plaintext `.env` on stdout.

use std::path::PathBuf;

use crate::cli::output;
use crate::cli::session::Session;
use crate::core::constants;
use crate::core::domain::DotEnv;
use crate::core::env;
use crate::error::Result;

/// Decrypt a sealed `.env` file.
pub fn execute(path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from(constants::ENV_FILE));
    let sealed = DotEnv::load(&path)?;

    let session = Session::open()?;
    let (opened, skipped) = env::open(&sealed, session.password());

    print!("{}", opened);
    for skip in &skipped {
        output::warn(&format!("skipped {}: {}", skip.name, skip.error));
    }

    Ok(())
}
