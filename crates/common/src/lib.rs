//! Shared building blocks for the anonymize workspace.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: error types and classification
//! - `privacy`: value normalization and salted SHA-512 fingerprinting
//! - `test-utils`: assertion macros and deterministic fixtures for tests

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod error;

// Privacy tier
// --------------------------------------------------------------------
#[cfg(feature = "privacy")]
pub mod privacy;

// Testing utilities
// ---------------------------------------------------------------
#[cfg(any(feature = "test-utils", test))]
pub mod testing;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "foundation")]
pub use error::{CommonError, CommonResult, ErrorClassification, ErrorSeverity};
#[cfg(feature = "privacy")]
pub use privacy::{
    Fingerprint, HashConfig, HashError, HashResult, Salt, SaltPolicy, SecureHasher,
    MIN_SALT_LENGTH,
};
