//! # Anonymize Core
//!
//! Entry points for normalizing and anonymizing free text, email addresses
//! and phone numbers.
//!
//! This crate contains:
//! - The [`Anonymizer`] service that composes normalization and hashing
//! - Configuration loading from the environment and settings files
//! - The process-wide anonymizer behind the free-function API
//!
//! ## Composition
//! Every entry point runs optional normalization first and optional hashing
//! second, never the reverse. Empty input returns an empty string before
//! either stage runs.
//!
//! ```no_run
//! use anonymize_core::{global, normalize_and_anonymize_email, normalize_phone};
//!
//! // Validates `SALT` once at startup.
//! global::init_from_env()?;
//!
//! assert_eq!(normalize_phone("+46 70-123 45 67"), "0046701234567");
//! let key = normalize_and_anonymize_email(" Jane.Doe@Example.com ")?;
//! assert_eq!(key.len(), 128);
//! # Ok::<(), anonymize_core::AnonymizeError>(())
//! ```

pub mod anonymizer;
pub mod api;
pub mod config;
pub mod error;
pub mod global;

pub use anonymize_common::privacy::{Fingerprint, HashConfig, Salt, SaltPolicy, MIN_SALT_LENGTH};
pub use anonymizer::{Anonymizer, Mode, ValueKind};
pub use api::{
    anonymize_email, anonymize_phone, anonymize_string, email, normalize_and_anonymize_email,
    normalize_and_anonymize_phone, normalize_and_anonymize_string, normalize_email,
    normalize_phone, normalize_string, phone, process, string,
};
pub use config::Settings;
pub use error::{AnonymizeError, AnonymizeResult};
