//! Salted Hashing Module
//!
//! Deterministic SHA-512 fingerprints over a process secret, for use as
//! pseudonymous join keys.

pub mod config;
pub mod error;
pub mod fingerprint;
pub mod hasher;
pub mod salt;

// Re-export commonly used types
pub use config::{HashConfig, SaltPolicy};
pub use error::{HashError, HashResult};
pub use fingerprint::{Fingerprint, FINGERPRINT_LENGTH};
pub use hasher::{salt_prefix_len, SecureHasher};
pub use salt::{Salt, MIN_SALT_LENGTH};
