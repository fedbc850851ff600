//! Secret record type.
//!
//! One named variable and the envelope of its value under the project password.

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::cipher::{self, Envelope};
use crate::core::validation;
use crate::error::{CipherError, Result};

/// An encrypted variable as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretRecord {
    #[serde(deserialize_with = "valid_name")]
    name: String,
    value: Envelope,
}

impl SecretRecord {
    /// Wrap an existing envelope.
    pub fn new(name: impl Into<String>, value: Envelope) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    /// Validate the name and seal the value under the project password.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a bad name or empty value, or
    /// `CipherError` if sealing fails.
    pub fn seal(name: &str, value: &str, password: &str) -> Result<Self> {
        validation::validate_key(name)?;
        validation::validate_value(name, value)?;
        Ok(Self::new(name, cipher::encrypt(value, password)?))
    }

    /// Decrypt the value.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::Authentication` on a wrong password or tampering.
    pub fn open(&self, password: &str) -> std::result::Result<String, CipherError> {
        cipher::decrypt(&self.value, password)
    }

    /// Variable name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Envelope of the value.
    pub fn envelope(&self) -> &Envelope {
        &self.value
    }
}

fn valid_name<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<String, D::Error> {
    let name = String::deserialize(deserializer)?;
    validation::validate_key(&name).map_err(serde::de::Error::custom)?;
    Ok(name)
}

impl std::fmt::Display for SecretRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
