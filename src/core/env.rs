//! `.env` conversions.
//!
//! Turns secret records into sealed or plaintext `.env` documents, and opens
//! `.env` files whose values use the colon-delimited envelope form.

use tracing::warn;

use crate::core::cipher::{self, StoredValue};
use crate::core::domain::{DotEnv, SecretRecord};
use crate::core::injector::{Batch, Skipped};

/// Render records as `.env` with each value in `ciphertext:salt:nonce:tag` form.
pub fn sealed(records: &[SecretRecord]) -> DotEnv {
    records
        .iter()
        .map(|r| (r.name().to_string(), r.envelope().to_text()))
        .collect()
}

/// Render a decrypted batch as plaintext `.env`.
pub fn plaintext(batch: &Batch) -> DotEnv {
    batch
        .values
        .iter()
        .map(|(k, v)| (k.clone(), v.as_str().to_string()))
        .collect()
}

/// Whether every value in `env` is a sealed envelope.
///
/// An empty document counts as sealed: it holds nothing worth keeping.
pub fn is_sealed(env: &DotEnv) -> bool {
    env.entries()
        .iter()
        .all(|(_, value)| matches!(StoredValue::classify(value), StoredValue::Sealed(_)))
}

/// Open a `.env` document holding colon-delimited envelopes.
///
/// Literal values pass through unchanged. Sealed values that fail to decrypt
/// are left out and reported, so one bad line never blocks the rest.
pub fn open(env: &DotEnv, password: &str) -> (DotEnv, Vec<Skipped>) {
    let mut opened = DotEnv::new();
    let mut skipped = Vec::new();

    for (key, value) in env.entries() {
        match StoredValue::classify(value) {
            StoredValue::Literal(literal) => opened.insert(key.clone(), literal),
            StoredValue::Sealed(envelope) => match cipher::decrypt(&envelope, password) {
                Ok(plain) => opened.insert(key.clone(), plain),
                Err(error) => {
                    warn!(name = %key, error = %error, "skipping variable");
                    skipped.push(Skipped {
                        name: key.clone(),
                        error,
                    });
                }
            },
        }
    }

    (opened, skipped)
}
