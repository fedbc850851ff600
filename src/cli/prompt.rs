//! Password input for the CLI.
//!
//! Order: an environment variable, then a hidden terminal prompt, then one
//! line of piped stdin.

use std::io::{self, IsTerminal};

use dialoguer::Password;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::access::PasswordSource;
use crate::core::constants;
use crate::core::validation;
use crate::error::Result;

/// Terminal-backed [`PasswordSource`].
pub struct Prompt {
    env: &'static str,
    confirm: bool,
}

impl Prompt {
    /// Prompt for an existing password, honoring `ENVHUB_PASSWORD`.
    pub fn existing() -> Self {
        Self {
            env: constants::PASSWORD_ENV,
            confirm: false,
        }
    }

    /// Prompt for a new password with confirmation, honoring `ENVHUB_PASSWORD`.
    pub fn new_password() -> Self {
        Self {
            env: constants::PASSWORD_ENV,
            confirm: true,
        }
    }

    /// Prompt for a collaborator's new access password, honoring
    /// `ENVHUB_ACCESS_PASSWORD`.
    pub fn access_password() -> Self {
        Self {
            env: constants::ACCESS_PASSWORD_ENV,
            confirm: true,
        }
    }
}

impl PasswordSource for Prompt {
    fn password(&mut self, prompt: &str) -> Result<Zeroizing<String>> {
        let password = if let Ok(value) = std::env::var(self.env) {
            debug!(var = self.env, "password from environment");
            Zeroizing::new(value)
        } else if io::stdin().is_terminal() {
            let mut input = Password::new().with_prompt(prompt);
            if self.confirm {
                input = input.with_confirmation("Confirm password", "passwords do not match");
            }
            Zeroizing::new(input.interact()?)
        } else {
            debug!("password from stdin");
            read_line()?
        };

        validation::validate_password(&password)?;
        Ok(password)
    }
}

/// Read one line from stdin without the trailing newline.
pub fn read_line() -> Result<Zeroizing<String>> {
    let mut input = Zeroizing::new(String::new());
    io::stdin().read_line(&mut input)?;
    let trimmed = input.trim_end_matches(['\r', '\n']).len();
    input.truncate(trimmed);
    Ok(input)
}
