//! Envelope encryption.
//!
//! Every secret value is sealed on its own: a fresh salt feeds PBKDF2-HMAC-SHA256
//! (100,000 rounds) to derive an AES-256 key, and a fresh nonce drives
//! AES-256-GCM. The resulting [`Envelope`] carries everything except the
//! password.
//!
//! ## Guarantees
//!
//! - Decryption either returns the exact original plaintext or fails.
//! - Any change to ciphertext, tag, nonce or salt, and any wrong password,
//!   fails with `CipherError::Authentication`.
//! - Two encryptions of the same input never share a salt or nonce.

mod aes;
mod envelope;

pub use aes::{derive_key, AesGcm};
pub(crate) use aes::random_bytes;
pub use envelope::{Envelope, StoredValue};

use crate::error::CipherError;

/// Password-based cipher.
///
/// Implemented by [`AesGcm`]; call sites that only need encrypt/decrypt
/// take the trait so the backend stays swappable.
pub trait Cipher {
    /// Seal a UTF-8 string under a password.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::EncryptionFailed` if the AEAD rejects the input.
    fn encrypt(&self, plaintext: &str, password: &str) -> Result<Envelope, CipherError>;

    /// Open an envelope with a password.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::Authentication` if the tag does not verify, or
    /// `CipherError::Encoding` if the plaintext is not UTF-8.
    fn decrypt(&self, envelope: &Envelope, password: &str) -> Result<String, CipherError>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}

/// Encrypt a value under a password with the default backend.
pub fn encrypt(plaintext: &str, password: &str) -> Result<Envelope, CipherError> {
    AesGcm.encrypt(plaintext, password)
}

/// Decrypt an envelope with the default backend.
pub fn decrypt(envelope: &Envelope, password: &str) -> Result<String, CipherError> {
    AesGcm.decrypt(envelope, password)
}
