//! List command.
//!
//! Lists variable names of the latest version. Names are not secret, so no
//! password is needed.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::store::{self, Store};
use crate::error::Result;

/// List variable names.
pub fn execute(json: bool) -> Result<()> {
    let config = Config::load()?;
    let store = store::default_backend()?;
    let name = &config.project.name;

    let version = store.latest_version(name)?;
    let records = store.current_secrets(name)?;
    let names: Vec<&str> = records.iter().map(|r| r.name()).collect();

    if json {
        let result = serde_json::json!({
            "project": name,
            "version": version.map(|v| v.number),
            "variables": names,
            "count": names.len()
        });
        output::data(&serde_json::to_string_pretty(&result)?);
    } else if names.is_empty() {
        output::dimmed("no variables stored");
    } else {
        output::header(&format!(
            "{} variables in {}",
            output::count(names.len()),
            output::key(name)
        ));
        output::rule();
        for name in names {
            output::list_item(name);
        }
    }

    Ok(())
}
