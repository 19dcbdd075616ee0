//! Free-function entry points backed by the process-wide anonymizer
//!
//! The `normalize_*` functions are pure and never touch the salt. The
//! `anonymize_*` and `normalize_and_anonymize_*` functions return an empty
//! string for empty input without initializing anything; otherwise they use
//! [`global::get`], which loads the salt on first use.

use crate::anonymizer::{Mode, ValueKind};
use crate::error::AnonymizeResult;
use crate::global;

/// Lowercase and trim free text.
///
/// ```
/// assert_eq!(anonymize_core::normalize_string("  Jane DOE "), "jane doe");
/// ```
pub fn normalize_string(value: &str) -> String {
    anonymize_common::privacy::normalize_string(value)
}

/// Strip all whitespace and lowercase an email address.
///
/// ```
/// assert_eq!(anonymize_core::normalize_email(" Jane.Doe @Example.COM"), "jane.doe@example.com");
/// ```
pub fn normalize_email(value: &str) -> String {
    anonymize_common::privacy::normalize_email(value)
}

/// Reduce a phone number to digits, turning a leading `+` into `00`.
///
/// ```
/// assert_eq!(anonymize_core::normalize_phone("+46 (70) 123-45-67"), "0046701234567");
/// ```
pub fn normalize_phone(value: &str) -> String {
    anonymize_common::privacy::normalize_phone(value)
}

pub fn anonymize_string(value: &str) -> AnonymizeResult<String> {
    process(ValueKind::String, Mode::Anonymize, value)
}

pub fn anonymize_email(value: &str) -> AnonymizeResult<String> {
    process(ValueKind::Email, Mode::Anonymize, value)
}

pub fn anonymize_phone(value: &str) -> AnonymizeResult<String> {
    process(ValueKind::Phone, Mode::Anonymize, value)
}

pub fn normalize_and_anonymize_string(value: &str) -> AnonymizeResult<String> {
    process(ValueKind::String, Mode::NormalizeAndAnonymize, value)
}

pub fn normalize_and_anonymize_email(value: &str) -> AnonymizeResult<String> {
    process(ValueKind::Email, Mode::NormalizeAndAnonymize, value)
}

pub fn normalize_and_anonymize_phone(value: &str) -> AnonymizeResult<String> {
    process(ValueKind::Phone, Mode::NormalizeAndAnonymize, value)
}

/// Run the stages `mode` selects on `value` with the process-wide anonymizer.
///
/// # Errors
/// Fails only when hashing is needed and the anonymizer cannot be
/// initialized, or the salt is rejected by the strict policy.
pub fn process(kind: ValueKind, mode: Mode, value: &str) -> AnonymizeResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }
    if !mode.anonymizes() {
        return Ok(match kind {
            ValueKind::String => normalize_string(value),
            ValueKind::Email => normalize_email(value),
            ValueKind::Phone => normalize_phone(value),
        });
    }
    global::get()?.process(kind, mode, value)
}

/// Normalize free text, hashing the result when `anonymize` is set.
pub fn string(value: &str, anonymize: bool) -> AnonymizeResult<String> {
    if anonymize {
        normalize_and_anonymize_string(value)
    } else {
        Ok(normalize_string(value))
    }
}

pub fn email(value: &str, anonymize: bool) -> AnonymizeResult<String> {
    if anonymize {
        normalize_and_anonymize_email(value)
    } else {
        Ok(normalize_email(value))
    }
}

pub fn phone(value: &str, anonymize: bool) -> AnonymizeResult<String> {
    if anonymize {
        normalize_and_anonymize_phone(value)
    } else {
        Ok(normalize_phone(value))
    }
}
