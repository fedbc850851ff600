//! AES-256-GCM backend keyed by PBKDF2-HMAC-SHA256.

use aes_gcm::aead::rand_core::RngCore;
use aes_gcm::aead::{Aead, OsRng};
use aes_gcm::{Aes256Gcm, KeyInit, Nonce};
use pbkdf2::pbkdf2_hmac;
use sha2::Sha256;
use tracing::trace;
use zeroize::Zeroizing;

use super::{Cipher, Envelope};
use crate::core::constants::{KDF_ROUNDS, KEY_LEN, NONCE_LEN, SALT_LEN, TAG_LEN};
use crate::error::CipherError;

/// Password-based AES-256-GCM cipher.
pub struct AesGcm;

impl Cipher for AesGcm {
    fn name(&self) -> &'static str {
        "aes-256-gcm"
    }

    fn encrypt(&self, plaintext: &str, password: &str) -> Result<Envelope, CipherError> {
        seal(plaintext.as_bytes(), password)
    }

    fn decrypt(&self, envelope: &Envelope, password: &str) -> Result<String, CipherError> {
        let plaintext = open(envelope, password)?;
        String::from_utf8(plaintext.to_vec()).map_err(|_| CipherError::Encoding)
    }
}

/// Derive a 32-byte key from a password and salt.
///
/// Deterministic: the same `(password, salt)` always yields the same key.
pub fn derive_key(password: &str, salt: &[u8]) -> Zeroizing<[u8; KEY_LEN]> {
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, KDF_ROUNDS, &mut *key);
    key
}

/// Fill a fixed-size buffer from the OS CSPRNG.
pub(crate) fn random_bytes<const N: usize>() -> [u8; N] {
    let mut bytes = [0u8; N];
    OsRng.fill_bytes(&mut bytes);
    bytes
}

pub(crate) fn seal(plaintext: &[u8], password: &str) -> Result<Envelope, CipherError> {
    trace!(plaintext_len = plaintext.len(), "encrypting");

    let salt = random_bytes::<SALT_LEN>();
    let nonce = random_bytes::<NONCE_LEN>();
    let key = derive_key(password, &salt);

    let cipher = Aes256Gcm::new_from_slice(&*key)
        .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;
    let mut sealed = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

    // AEAD output is ciphertext || tag.
    let split = sealed.len() - TAG_LEN;
    let mut tag = [0u8; TAG_LEN];
    tag.copy_from_slice(&sealed[split..]);
    sealed.truncate(split);

    trace!(ciphertext_len = sealed.len(), "encrypted");

    Ok(Envelope {
        ciphertext: sealed,
        tag,
        salt,
        nonce,
    })
}

pub(crate) fn open(envelope: &Envelope, password: &str) -> Result<Zeroizing<Vec<u8>>, CipherError> {
    trace!(ciphertext_len = envelope.ciphertext.len(), "decrypting");

    let key = derive_key(password, &envelope.salt);
    let cipher = Aes256Gcm::new_from_slice(&*key)
        .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

    let mut sealed = Vec::with_capacity(envelope.ciphertext.len() + TAG_LEN);
    sealed.extend_from_slice(&envelope.ciphertext);
    sealed.extend_from_slice(&envelope.tag);

    cipher
        .decrypt(Nonce::from_slice(&envelope.nonce), sealed.as_slice())
        .map(Zeroizing::new)
        .map_err(|_| CipherError::Authentication)
}
