//! Privacy Module
//!
//! Canonicalization of free text, email addresses and phone numbers, and
//! one-way salted fingerprints of the result.

pub mod hash;
pub mod normalize;

// Re-export commonly used types
pub use hash::{
    Fingerprint, HashConfig, HashError, HashResult, Salt, SaltPolicy, SecureHasher,
    MIN_SALT_LENGTH,
};
pub use normalize::{normalize_email, normalize_phone, normalize_string};
