//! Anonymizer service
//!
//! Composes the normalizers with a [`SecureHasher`]. Every operation runs
//! normalization first and hashing second; empty input short-circuits to an
//! empty string before either stage.

use std::fmt;
use std::str::FromStr;

use anonymize_common::error::CommonError;
use anonymize_common::privacy::{
    normalize_email, normalize_phone, normalize_string, HashConfig, SecureHasher,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::config::loader;
use crate::error::AnonymizeResult;

/// Kind of personal value being processed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Free text such as a name
    String,
    Email,
    Phone,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValueKind {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "string" | "text" => Ok(Self::String),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            other => Err(CommonError::validation(
                "kind",
                format!("unknown value kind '{}', expected 'string', 'email' or 'phone'", other),
            )),
        }
    }
}

/// Which stages to run on a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Normalize,
    Anonymize,
    NormalizeAndAnonymize,
}

impl Mode {
    pub fn normalizes(self) -> bool {
        matches!(self, Self::Normalize | Self::NormalizeAndAnonymize)
    }

    pub fn anonymizes(self) -> bool {
        matches!(self, Self::Anonymize | Self::NormalizeAndAnonymize)
    }

    fn from_flag(anonymize: bool) -> Self {
        if anonymize {
            Self::NormalizeAndAnonymize
        } else {
            Self::Normalize
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normalize => "normalize",
            Self::Anonymize => "anonymize",
            Self::NormalizeAndAnonymize => "normalize_and_anonymize",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "normalize" => Ok(Self::Normalize),
            "anonymize" => Ok(Self::Anonymize),
            "normalize_and_anonymize" => Ok(Self::NormalizeAndAnonymize),
            other => Err(CommonError::validation(
                "mode",
                format!(
                    "unknown mode '{}', expected 'normalize', 'anonymize' or \
                     'normalize_and_anonymize'",
                    other
                ),
            )),
        }
    }
}

/// Normalizes and fingerprints personal values with one salt
///
/// Construction validates the salt, so a strict anonymizer that exists can
/// always hash.
#[derive(Debug)]
pub struct Anonymizer {
    hasher: SecureHasher,
}

impl Anonymizer {
    /// Build an anonymizer from an explicit configuration.
    ///
    /// # Errors
    /// `HashError::SaltTooShort` when the salt is short and the policy is
    /// strict.
    pub fn new(config: HashConfig) -> AnonymizeResult<Self> {
        let hasher = SecureHasher::with_config(config)?;
        info!(passthrough = hasher.is_passthrough(), "Anonymizer initialized");
        Ok(Self { hasher })
    }

    /// Build an anonymizer from the environment (and `.env`, when present).
    pub fn from_env() -> AnonymizeResult<Self> {
        Self::new(loader::load()?)
    }

    /// Canonicalize `value` for its kind. Never fails.
    pub fn normalize(&self, kind: ValueKind, value: &str) -> String {
        normalize(kind, value)
    }

    /// Hash `value` as-is, honoring the salt policy.
    pub fn anonymize(&self, value: &str) -> AnonymizeResult<String> {
        Ok(self.hasher.hash(value)?)
    }

    /// Run the stages `mode` selects on `value`.
    #[instrument(skip(self, value), fields(value_length = value.len()))]
    pub fn process(&self, kind: ValueKind, mode: Mode, value: &str) -> AnonymizeResult<String> {
        if value.is_empty() {
            debug!("Empty input, skipping all stages");
            return Ok(String::new());
        }

        let normalized =
            if mode.normalizes() { normalize(kind, value) } else { value.to_string() };
        if !mode.anonymizes() {
            return Ok(normalized);
        }
        self.anonymize(&normalized)
    }

    /// Process a batch, failing on the first error.
    pub fn process_many(
        &self,
        kind: ValueKind,
        mode: Mode,
        values: &[&str],
    ) -> AnonymizeResult<Vec<String>> {
        values.iter().map(|value| self.process(kind, mode, value)).collect()
    }

    pub fn normalize_string(&self, value: &str) -> String {
        normalize_string(value)
    }

    pub fn normalize_email(&self, value: &str) -> String {
        normalize_email(value)
    }

    pub fn normalize_phone(&self, value: &str) -> String {
        normalize_phone(value)
    }

    pub fn anonymize_string(&self, value: &str) -> AnonymizeResult<String> {
        self.process(ValueKind::String, Mode::Anonymize, value)
    }

    pub fn anonymize_email(&self, value: &str) -> AnonymizeResult<String> {
        self.process(ValueKind::Email, Mode::Anonymize, value)
    }

    pub fn anonymize_phone(&self, value: &str) -> AnonymizeResult<String> {
        self.process(ValueKind::Phone, Mode::Anonymize, value)
    }

    pub fn normalize_and_anonymize_string(&self, value: &str) -> AnonymizeResult<String> {
        self.process(ValueKind::String, Mode::NormalizeAndAnonymize, value)
    }

    pub fn normalize_and_anonymize_email(&self, value: &str) -> AnonymizeResult<String> {
        self.process(ValueKind::Email, Mode::NormalizeAndAnonymize, value)
    }

    pub fn normalize_and_anonymize_phone(&self, value: &str) -> AnonymizeResult<String> {
        self.process(ValueKind::Phone, Mode::NormalizeAndAnonymize, value)
    }

    /// Normalize `value` as free text, then hash it when `anonymize` is set.
    pub fn string(&self, value: &str, anonymize: bool) -> AnonymizeResult<String> {
        self.process(ValueKind::String, Mode::from_flag(anonymize), value)
    }

    pub fn email(&self, value: &str, anonymize: bool) -> AnonymizeResult<String> {
        self.process(ValueKind::Email, Mode::from_flag(anonymize), value)
    }

    pub fn phone(&self, value: &str, anonymize: bool) -> AnonymizeResult<String> {
        self.process(ValueKind::Phone, Mode::from_flag(anonymize), value)
    }

    /// True when hashing returns input unchanged because the salt is short.
    pub fn is_passthrough(&self) -> bool {
        self.hasher.is_passthrough()
    }

    pub fn hasher(&self) -> &SecureHasher {
        &self.hasher
    }
}

fn normalize(kind: ValueKind, value: &str) -> String {
    match kind {
        ValueKind::String => normalize_string(value),
        ValueKind::Email => normalize_email(value),
        ValueKind::Phone => normalize_phone(value),
    }
}
