//! Members command.
//!
//! Lists the project owner and every collaborator holding an access record.

use crate::cli::output;
use crate::core::config::Config;
use crate::core::store::{self, Store};
use crate::error::Result;

/// List project members.
pub fn execute(json: bool) -> Result<()> {
    let config = Config::load()?;
    let store = store::default_backend()?;
    let name = &config.project.name;

    let project = store.project(name)?;
    let members = store.members(name)?;

    if json {
        let members_json: Vec<_> = members
            .iter()
            .map(|(user, role)| serde_json::json!({ "user": user, "role": role }))
            .collect();
        let result = serde_json::json!({
            "owner": project.owner,
            "members": members_json,
            "count": members.len()
        });
        output::data(&serde_json::to_string_pretty(&result)?);
    } else {
        output::header(&format!("members of {}", output::key(name)));
        output::rule();
        output::kv("owner", &project.owner);
        for (user, role) in &members {
            output::kv(role.as_str(), user);
        }
    }

    Ok(())
}
