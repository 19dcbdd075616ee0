use anonymize_common::error::{CommonError, ErrorSeverity};
use anonymize_common::privacy::HashError;
use anonymize_common::{impl_error_classification, impl_error_conversion};
use thiserror::Error;

/// Errors surfaced by the entry points and configuration loader
#[derive(Debug, Error)]
pub enum AnonymizeError {
    #[error(transparent)]
    Common(#[from] CommonError),

    #[error(transparent)]
    Hash(#[from] HashError),

    #[error("Anonymizer is already initialized for this process")]
    AlreadyInitialized,
}

pub type AnonymizeResult<T> = Result<T, AnonymizeError>;

impl AnonymizeError {
    /// True when the salt is missing or too short.
    pub fn is_salt_error(&self) -> bool {
        matches!(self, Self::Hash(e) if e.is_salt_error())
    }
}

impl_error_conversion!(AnonymizeError, Common);

impl_error_classification!(AnonymizeError, Common,
    Self::Hash(e) => {
        retryable: anonymize_common::error::ErrorClassification::is_retryable(e),
        severity: anonymize_common::error::ErrorClassification::severity(e),
        critical: anonymize_common::error::ErrorClassification::is_critical(e),
    },
    Self::AlreadyInitialized => {
        retryable: false,
        severity: ErrorSeverity::Warning,
        critical: false,
    }
);

#[cfg(test)]
mod tests {
    use anonymize_common::error::ErrorClassification;

    use super::*;

    #[test]
    fn test_hash_errors_keep_their_classification() {
        let err = AnonymizeError::from(HashError::SaltTooShort { length: 3, minimum: 128 });
        assert!(err.is_salt_error());
        assert!(err.is_critical());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.to_string(), "Salt is too short: 3 characters, at least 128 required");
    }

    #[test]
    fn test_already_initialized() {
        let err = AnonymizeError::AlreadyInitialized;
        assert!(!err.is_salt_error());
        assert_eq!(err.severity(), ErrorSeverity::Warning);
    }

    #[test]
    fn test_io_error_converts_through_common() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AnonymizeError::from(io);
        assert!(matches!(err, AnonymizeError::Common(CommonError::Persistence { .. })));
    }
}
