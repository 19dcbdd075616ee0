use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::{HashError, HashResult};

/// Hex characters in a SHA-512 digest.
pub const FINGERPRINT_LENGTH: usize = 128;

/// A 128-character lowercase hexadecimal SHA-512 fingerprint
///
/// Only constructed from a digest or from text that passes the same shape
/// check, so holding one guarantees the value is not plaintext.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Fingerprint(String);

impl Fingerprint {
    pub(crate) fn from_digest(digest: &[u8]) -> Self {
        Self(hex::encode(digest))
    }

    /// Parse a stored fingerprint, checking length and alphabet.
    pub fn parse(value: &str) -> HashResult<Self> {
        let well_formed = value.len() == FINGERPRINT_LENGTH
            && value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'));
        if !well_formed {
            return Err(HashError::InvalidInput(format!(
                "fingerprint must be {} lowercase hex characters",
                FINGERPRINT_LENGTH
            )));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Fingerprint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Fingerprint {
    type Error = HashError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Fingerprint> for String {
    fn from(value: Fingerprint) -> Self {
        value.0
    }
}
