//! Password hashing and verification.
//!
//! A stored hash is `base64(salt || pbkdf2(password, salt))` with a 16-byte salt
//! and a 32-byte PBKDF2-HMAC-SHA256 output. The password itself is never kept.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::cipher::{derive_key, random_bytes};
use crate::core::constants::{KEY_LEN, SALT_LEN};

/// Storable proof of a password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an already-encoded hash string (e.g. read from disk).
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded form.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hash a password with a fresh salt.
///
/// Two calls for the same password produce different records.
pub fn hash_password(password: &str) -> PasswordHash {
    let salt = random_bytes::<SALT_LEN>();
    let derived = derive_key(password, &salt);

    let mut combined = Vec::with_capacity(SALT_LEN + KEY_LEN);
    combined.extend_from_slice(&salt);
    combined.extend_from_slice(&*derived);

    PasswordHash(BASE64.encode(combined))
}

/// Check a password against a stored hash.
///
/// Returns `false` for a mismatch and for any malformed record; never errors.
pub fn verify_password(password: &str, record: &PasswordHash) -> bool {
    let combined = match BASE64.decode(record.as_str().trim()) {
        Ok(bytes) => bytes,
        Err(e) => {
            debug!(error = %e, "password hash is not valid base64");
            return false;
        }
    };

    if combined.len() != SALT_LEN + KEY_LEN {
        debug!(len = combined.len(), "password hash has wrong length");
        return false;
    }

    let (salt, stored) = combined.split_at(SALT_LEN);
    let derived = derive_key(password, salt);
    constant_time_eq(&*derived, stored)
}

/// Compare two byte strings without short-circuiting on the first difference.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
