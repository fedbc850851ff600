//! Encrypted envelope and its textual forms.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};

use crate::core::constants::{NONCE_LEN, SALT_LEN, TAG_LEN};
use crate::error::CipherError;

/// Everything needed to decrypt one value: ciphertext, tag, salt and nonce.
///
/// Fields are held decoded and fixed-size; base64 only appears at the edges
/// (serde and the colon-delimited text form).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawEnvelope", into = "RawEnvelope")]
pub struct Envelope {
    pub(crate) ciphertext: Vec<u8>,
    pub(crate) tag: [u8; TAG_LEN],
    pub(crate) salt: [u8; SALT_LEN],
    pub(crate) nonce: [u8; NONCE_LEN],
}

/// Wire shape: four independently base64-encoded fields.
#[derive(Serialize, Deserialize)]
struct RawEnvelope {
    ciphertext: String,
    salt: String,
    nonce: String,
    tag: String,
}

impl Envelope {
    /// Decode the four base64 fields, checking lengths.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::MalformedEnvelope` naming the first bad field.
    pub fn from_parts(ciphertext: &str, salt: &str, nonce: &str, tag: &str) -> Result<Self, CipherError> {
        Ok(Self {
            ciphertext: decode("ciphertext", ciphertext)?,
            salt: decode_fixed("salt", salt)?,
            nonce: decode_fixed("nonce", nonce)?,
            tag: decode_fixed("tag", tag)?,
        })
    }

    /// Parse the `ciphertext:salt:nonce:tag` text form.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::MalformedEnvelope` on a wrong field count or a
    /// field that does not decode.
    pub fn parse(text: &str) -> Result<Self, CipherError> {
        let parts: Vec<&str> = text.split(':').collect();
        match parts.as_slice() {
            [ciphertext, salt, nonce, tag] => Self::from_parts(ciphertext, salt, nonce, tag),
            _ => Err(CipherError::MalformedEnvelope(format!(
                "expected 4 colon-separated fields, found {}",
                parts.len()
            ))),
        }
    }

    /// Render the `ciphertext:salt:nonce:tag` text form.
    pub fn to_text(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            BASE64.encode(&self.ciphertext),
            BASE64.encode(self.salt),
            BASE64.encode(self.nonce),
            BASE64.encode(self.tag)
        )
    }

    /// Ciphertext bytes (without the tag).
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// Authentication tag.
    pub fn tag(&self) -> &[u8; TAG_LEN] {
        &self.tag
    }

    /// KDF salt.
    pub fn salt(&self) -> &[u8; SALT_LEN] {
        &self.salt
    }

    /// AEAD nonce.
    pub fn nonce(&self) -> &[u8; NONCE_LEN] {
        &self.nonce
    }
}

impl std::fmt::Display for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl TryFrom<RawEnvelope> for Envelope {
    type Error = CipherError;

    fn try_from(raw: RawEnvelope) -> Result<Self, Self::Error> {
        Self::from_parts(&raw.ciphertext, &raw.salt, &raw.nonce, &raw.tag)
    }
}

impl From<Envelope> for RawEnvelope {
    fn from(envelope: Envelope) -> Self {
        Self {
            ciphertext: BASE64.encode(&envelope.ciphertext),
            salt: BASE64.encode(envelope.salt),
            nonce: BASE64.encode(envelope.nonce),
            tag: BASE64.encode(envelope.tag),
        }
    }
}

/// A value read from a text file: either sealed or a plain literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredValue {
    Sealed(Envelope),
    Literal(String),
}

impl StoredValue {
    /// Classify a stored text value.
    ///
    /// Only a value that fully parses as an envelope is treated as sealed.
    /// Anything else, including colon-bearing values such as URLs, is a literal.
    pub fn classify(value: &str) -> Self {
        if !value.contains(':') {
            return Self::Literal(value.to_string());
        }
        match Envelope::parse(value) {
            Ok(envelope) => Self::Sealed(envelope),
            Err(_) => Self::Literal(value.to_string()),
        }
    }
}

fn decode(field: &str, value: &str) -> Result<Vec<u8>, CipherError> {
    BASE64
        .decode(value.trim())
        .map_err(|e| CipherError::MalformedEnvelope(format!("{} is not valid base64: {}", field, e)))
}

fn decode_fixed<const N: usize>(field: &str, value: &str) -> Result<[u8; N], CipherError> {
    let bytes = decode(field, value)?;
    let len = bytes.len();
    bytes.try_into().map_err(|_| {
        CipherError::MalformedEnvelope(format!("{} must be {} bytes, got {}", field, N, len))
    })
}
