//! Testing utilities and helpers
//!
//! - **[`assertions`]**: assertion macros and fingerprint shape checks
//! - **[`fixtures`]**: salts and sample PII values for tests and benches
//!
//! ## Usage
//!
//! ```rust
//! # #[cfg(feature = "test-utils")]
//! # {
//! use anonymize_common::testing::fixture_salt;
//!
//! let salt = fixture_salt();
//! assert_eq!(salt.len(), 128);
//!
//! let result: Result<(), String> = Err("Salt is too short".to_string());
//! anonymize_common::assert_error_contains!(result, "too short");
//! # }
//! ```

pub mod assertions;
#[cfg(feature = "test-utils")]
pub mod fixtures;

// Note: Macros exported with #[macro_export] are available at crate root
pub use assertions::assert_fingerprint_shape;
#[cfg(feature = "test-utils")]
pub use fixtures::{fixture_salt, random_salt, sample_emails, sample_phones};
