//! Integration tests for `anonymize_common::error`.
//!
//! These suites validate classification and module error delegation so
//! downstream crates receive consistent failure semantics.

use anonymize_common::error::{CommonError, ErrorClassification, ErrorSeverity};
use anonymize_common::{impl_error_classification, impl_error_conversion};
use thiserror::Error;

#[derive(Debug, Error)]
enum SettingsError {
    #[error(transparent)]
    Common(#[from] CommonError),

    #[error("Unknown key: {0}")]
    UnknownKey(String),
}

impl_error_conversion!(SettingsError, Common);

impl_error_classification!(SettingsError, Common,
    Self::UnknownKey(_) => {
        retryable: false,
        severity: ErrorSeverity::Warning,
        critical: false,
    }
);

/// Validates that `CommonError` classification surfaces the expected
/// retryable, severity and criticality combinations for each variant.
#[test]
fn classification_matrix_matches_expected_contract() {
    let cases = vec![
        (CommonError::config("missing salt"), false, ErrorSeverity::Error, false),
        (CommonError::serialization_format("TOML", "invalid"), false, ErrorSeverity::Error, false),
        (CommonError::persistence("disk read failed"), true, ErrorSeverity::Error, false),
        (CommonError::validation("input", "empty"), false, ErrorSeverity::Error, false),
    ];

    for (err, retryable, severity, critical) in cases {
        assert_eq!(err.is_retryable(), retryable, "retryable mismatch for {err}");
        assert_eq!(err.severity(), severity, "severity mismatch for {err}");
        assert_eq!(err.is_critical(), critical, "critical mismatch for {err}");
    }
}

/// Validates the conversion macro routes std and serde errors through
/// `CommonError`.
#[test]
fn module_error_converts_std_errors() {
    fn read() -> Result<(), SettingsError> {
        std::fs::read_to_string("/nonexistent/anonymize/settings.toml")?;
        Ok(())
    }

    fn parse() -> Result<serde_json::Value, SettingsError> {
        Ok(serde_json::from_str("{not json")?)
    }

    let err = read().unwrap_err();
    assert!(matches!(err, SettingsError::Common(CommonError::Persistence { .. })));
    assert!(err.is_retryable());

    let err = parse().unwrap_err();
    assert!(matches!(err, SettingsError::Common(CommonError::Serialization { .. })));
    assert!(!err.is_retryable());
}

/// Validates module-specific variants use their own classification.
#[test]
fn module_error_classification_delegates() {
    let err = SettingsError::UnknownKey("salt_len".to_string());
    assert_eq!(err.severity(), ErrorSeverity::Warning);
    assert!(!err.is_critical());

    let err = SettingsError::from(CommonError::persistence("disk"));
    assert_eq!(err.severity(), ErrorSeverity::Error);
    assert!(err.is_retryable());
}
