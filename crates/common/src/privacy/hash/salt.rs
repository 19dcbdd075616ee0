//! Secret salt with automatic memory zeroization
//!
//! The salt is an opaque secret supplied by the host process. This wrapper
//! keeps it out of logs and zeroes its memory on drop.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Minimum salt length accepted for hashing.
pub const MIN_SALT_LENGTH: usize = 128;

/// Process secret mixed into every fingerprint
///
/// Length and prefixes are measured in characters, so a multi-byte salt is
/// never cut inside a character and never passes the minimum on byte count
/// alone.
///
/// `Debug` and `Display` are redacted; use [`Salt::expose`] only for the
/// digest computation itself.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Salt {
    inner: String,
}

impl Salt {
    /// Wrap a secret value
    pub fn new(value: impl Into<String>) -> Self {
        Self { inner: value.into() }
    }

    /// Expose the inner value (use with caution)
    ///
    /// # Security Warning
    /// The exposed value must not be stored or logged.
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.inner.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Whether the salt is long enough to hash with
    pub fn meets_minimum(&self) -> bool {
        self.len() >= MIN_SALT_LENGTH
    }

    /// UTF-8 bytes of the first `n` characters, clamped to the salt
    pub fn prefix(&self, n: usize) -> &[u8] {
        let end = self.inner.char_indices().nth(n).map_or(self.inner.len(), |(idx, _)| idx);
        &self.inner.as_bytes()[..end]
    }
}

impl From<String> for Salt {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Salt {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl PartialEq for Salt {
    fn eq(&self, other: &Self) -> bool {
        constant_time_eq(self.inner.as_bytes(), other.inner.as_bytes())
    }
}

impl Eq for Salt {}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Salt(*** {} chars)", self.len())
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***")
    }
}

/// Constant-time comparison to prevent timing attacks
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }

    result == 0
}

#[cfg(test)]
mod tests {
    //! Unit tests for privacy::hash::salt.
    use super::*;

    #[test]
    fn test_salt_debug_and_display_are_redacted() {
        let salt = Salt::new("super-secret-value");
        assert_eq!(format!("{salt}"), "***");
        assert_eq!(format!("{salt:?}"), "Salt(*** 18 chars)");
        assert!(!format!("{salt:?}").contains("secret"));
    }

    /// Validates `Salt::meets_minimum` at the 128 boundary.
    #[test]
    fn test_meets_minimum_boundary() {
        assert!(!Salt::new("a".repeat(MIN_SALT_LENGTH - 1)).meets_minimum());
        assert!(Salt::new("a".repeat(MIN_SALT_LENGTH)).meets_minimum());
        assert!(!Salt::new("").meets_minimum());
    }

    /// Validates length counts characters, not UTF-8 bytes.
    ///
    /// Assertions:
    /// - 64 two-byte characters fall short of the minimum.
    /// - 128 two-byte characters meet it.
    #[test]
    fn test_multibyte_salt_length_in_characters() {
        let short = Salt::new("é".repeat(64));
        assert_eq!(short.len(), 64);
        assert!(!short.meets_minimum());
        assert!(Salt::new("é".repeat(MIN_SALT_LENGTH)).meets_minimum());
    }

    /// Validates a prefix never ends inside a character.
    #[test]
    fn test_prefix_takes_whole_characters() {
        let salt = Salt::new("aéþz");
        assert_eq!(salt.prefix(1), b"a");
        assert_eq!(salt.prefix(2), "aé".as_bytes());
        assert_eq!(salt.prefix(3), "aéþ".as_bytes());
        assert_eq!(salt.prefix(9), "aéþz".as_bytes());
    }

    #[test]
    fn test_prefix_clamps() {
        let salt = Salt::new("abcdef");
        assert_eq!(salt.prefix(0), b"");
        assert_eq!(salt.prefix(2), b"ab");
        assert_eq!(salt.prefix(100), b"abcdef");
    }

    #[test]
    fn test_equality() {
        assert_eq!(Salt::new("abc"), Salt::from("abc"));
        assert_ne!(Salt::new("abc"), Salt::from("abd".to_string()));
        assert_ne!(Salt::new("abc"), Salt::new("abcd"));
    }
}
