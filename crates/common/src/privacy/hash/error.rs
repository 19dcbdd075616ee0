use thiserror::Error;

use crate::error::{CommonError, ErrorSeverity};
use crate::{impl_error_classification, impl_error_conversion};

/// Errors raised while configuring the hasher or fingerprinting a value
#[derive(Debug, Error)]
pub enum HashError {
    #[error(transparent)]
    Common(#[from] CommonError),

    #[error("Salt is not set (expected environment variable {0})")]
    SaltMissing(String),

    #[error("Salt is too short: {length} characters, at least {minimum} required")]
    SaltTooShort { length: usize, minimum: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type HashResult<T> = Result<T, HashError>;

impl HashError {
    /// True when the error means the salt cannot be used for hashing.
    pub fn is_salt_error(&self) -> bool {
        matches!(self, Self::SaltMissing(_) | Self::SaltTooShort { .. })
    }
}

impl_error_conversion!(HashError, Common);

impl_error_classification!(HashError, Common,
    Self::SaltMissing(_) => {
        retryable: false,
        severity: ErrorSeverity::Critical,
        critical: true,
    },
    Self::SaltTooShort { .. } => {
        retryable: false,
        severity: ErrorSeverity::Critical,
        critical: true,
    },
    Self::InvalidInput(_) => {
        retryable: false,
        severity: ErrorSeverity::Error,
        critical: false,
    }
);

impl From<HashError> for CommonError {
    fn from(err: HashError) -> Self {
        match err {
            HashError::Common(e) => e,
            HashError::SaltMissing(var) => {
                CommonError::config_field(var, "salt environment variable is not set")
            }
            HashError::SaltTooShort { length, minimum } => CommonError::config_field(
                "salt",
                format!("salt is {} characters, at least {} required", length, minimum),
            ),
            HashError::InvalidInput(msg) => CommonError::validation("input", msg),
        }
    }
}
