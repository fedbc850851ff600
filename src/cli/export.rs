//! Export command.
//!
//! Prints the latest version as plaintext `.env` on stdout. Variables that
//! fail to decrypt are reported on stderr and left out.

use crate::cli::output;
use crate::cli::session::Session;
use crate::core::{env, injector};
use crate::error::Result;

/// Export decrypted variables as `.env`.
pub fn execute() -> Result<()> {
    let session = Session::open()?;
    let batch = injector::decrypt_lenient(&session.current_secrets()?, session.password());

    print!("{}", env::plaintext(&batch));
    for skipped in &batch.skipped {
        output::warn(&format!("skipped {}: {}", skipped.name, skipped.error));
    }

    Ok(())
}
