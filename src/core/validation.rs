//! Input validation for envhub operations.
//!
//! Validates variable names, values, project names and passwords.

use crate::error::{Result, ValidationError};

/// Validate a variable name.
///
/// Names must be valid environment variable names:
/// - Only A-Z, a-z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot be empty
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(ValidationError::EmptyKey.into());
    }

    if key.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidKey {
            key: key.to_string(),
            reason: "cannot start with a digit".to_string(),
        }
        .into());
    }

    if let Some((i, ch)) = key
        .chars()
        .enumerate()
        .find(|(_, ch)| !ch.is_ascii_alphanumeric() && *ch != '_')
    {
        return Err(ValidationError::InvalidKey {
            key: key.to_string(),
            reason: format!(
                "invalid character '{}' at position {}. Only letters, digits, and underscore are allowed",
                ch,
                i + 1
            ),
        }
        .into());
    }

    Ok(())
}

/// Validate a variable value.
///
/// # Errors
///
/// Returns `ValidationError::EmptyValue` if the value is empty.
pub fn validate_value(key: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ValidationError::EmptyValue(key.to_string()).into());
    }

    Ok(())
}

/// Validate a project name.
///
/// Project names double as store file names, so they are limited to
/// letters, digits, `-`, `_` and `.`, and may not start with a dot.
///
/// # Errors
///
/// Returns `ValidationError::InvalidProjectName` on failure.
pub fn validate_project_name(name: &str) -> Result<()> {
    let reason = if name.is_empty() {
        Some("cannot be empty".to_string())
    } else if name.starts_with('.') {
        Some("cannot start with '.'".to_string())
    } else if name.len() > 64 {
        Some("must be at most 64 characters".to_string())
    } else {
        name.chars()
            .find(|ch| !ch.is_ascii_alphanumeric() && !matches!(ch, '-' | '_' | '.'))
            .map(|ch| format!("invalid character '{}'", ch))
    };

    match reason {
        Some(reason) => Err(ValidationError::InvalidProjectName {
            name: name.to_string(),
            reason,
        }
        .into()),
        None => Ok(()),
    }
}

/// Validate a newly chosen password.
///
/// # Errors
///
/// Returns `ValidationError::EmptyPassword` if the password is empty.
pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(ValidationError::EmptyPassword.into());
    }
    Ok(())
}
