//! Common error types and utilities for the anonymize workspace
//!
//! This module provides the error handling infrastructure shared by the
//! privacy primitives and the entry-point crate.
//!
//! # Error Handling Architecture
//!
//! 1. **`CommonError`**: the error patterns that appear in more than one
//!    module (configuration, serialization, persistence, validation)
//!
//! 2. **`ErrorClassification` trait**: a standard interface for classifying
//!    errors by retryability, severity and criticality
//!
//! 3. **`ErrorSeverity` enum**: unified severity levels for logging
//!
//! Module-specific errors **compose** with `CommonError` rather than
//! duplicating it:
//!
//! ```rust,ignore
//! #[derive(Debug, Error)]
//! pub enum HashError {
//!     #[error("Salt is too short: {length} < {minimum}")]
//!     SaltTooShort { length: usize, minimum: usize },
//!
//!     #[error(transparent)]
//!     Common(#[from] CommonError),
//! }
//!
//! impl_error_classification!(HashError, Common,
//!     Self::SaltTooShort { .. } => {
//!         retryable: false,
//!         severity: ErrorSeverity::Critical,
//!         critical: true,
//!     }
//! );
//! ```
//!
//! ## ErrorSeverity Levels
//!
//! | Level | Use Case | Examples |
//! |-------|----------|----------|
//! | **Info** | Expected conditions | Empty input |
//! | **Warning** | Degraded but operational | Second explicit install |
//! | **Error** | Failure requiring attention | Bad settings file, invalid input |
//! | **Critical** | Privacy guarantees at risk | Missing or short salt under strict policy |

use std::fmt;

/// Standard result type using CommonError
pub type CommonResult<T> = Result<T, CommonError>;

/// Common error variants that appear across multiple modules
#[derive(Debug, Clone)]
pub enum CommonError {
    /// Configuration-related errors
    Config { message: String, field: Option<String> },

    /// Serialization or deserialization errors
    Serialization { message: String, format: Option<String> },

    /// File I/O errors
    Persistence { message: String },

    /// Validation errors
    Validation { field: String, message: String },
}

impl fmt::Display for CommonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config { message, field } => {
                if let Some(field) = field {
                    write!(f, "Configuration error in field '{}': {}", field, message)
                } else {
                    write!(f, "Configuration error: {}", message)
                }
            }
            Self::Serialization { message, format } => {
                if let Some(format) = format {
                    write!(f, "Serialization error ({}): {}", format, message)
                } else {
                    write!(f, "Serialization error: {}", message)
                }
            }
            Self::Persistence { message } => write!(f, "Persistence error: {}", message),
            Self::Validation { field, message } => {
                write!(f, "Validation error for field '{}': {}", field, message)
            }
        }
    }
}

impl std::error::Error for CommonError {}

impl ErrorClassification for CommonError {
    /// Only file reads may succeed on a later attempt.
    fn is_retryable(&self) -> bool {
        matches!(self, Self::Persistence { .. })
    }

    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }

    fn is_critical(&self) -> bool {
        false
    }
}

impl CommonError {
    /// Create a simple configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config { message: message.into(), field: None }
    }

    /// Create a configuration error for a specific field
    pub fn config_field<S: Into<String>, F: Into<String>>(field: F, message: S) -> Self {
        Self::Config { message: message.into(), field: Some(field.into()) }
    }

    /// Create a serialization error with format information
    pub fn serialization_format<S: Into<String>, F: Into<String>>(format: F, message: S) -> Self {
        Self::Serialization { message: message.into(), format: Some(format.into()) }
    }

    pub fn persistence<S: Into<String>>(message: S) -> Self {
        Self::Persistence { message: message.into() }
    }

    /// Create a validation error
    pub fn validation<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        Self::Validation { field: field.into(), message: message.into() }
    }
}

/// Error classification trait for consistent error handling across modules
pub trait ErrorClassification {
    /// Check if this error is retryable
    fn is_retryable(&self) -> bool;

    /// Get the error severity level
    ///
    /// Used for logging and alerting decisions.
    fn severity(&self) -> ErrorSeverity;

    /// Check if this is a critical error requiring immediate attention
    ///
    /// In this workspace a critical error means hashed output cannot be
    /// trusted to be a fingerprint.
    fn is_critical(&self) -> bool;
}

/// Error severity levels for monitoring and alerting
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational, typically for debugging
    Info,
    /// Warning, should be monitored but not critical
    Warning,
    /// Error, requires attention and action
    Error,
    /// Critical, immediate action required
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

// Standard conversions from common error types
impl From<serde_json::Error> for CommonError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization_format("JSON", err.to_string())
    }
}

impl From<std::io::Error> for CommonError {
    fn from(err: std::io::Error) -> Self {
        Self::persistence(err.to_string())
    }
}

impl From<toml::de::Error> for CommonError {
    fn from(err: toml::de::Error) -> Self {
        Self::serialization_format("TOML", err.to_string())
    }
}

/// Utility macro for creating error conversions from std types
///
/// ```rust,ignore
/// #[derive(Debug, thiserror::Error)]
/// pub enum MyError {
///     #[error(transparent)]
///     Common(#[from] CommonError),
/// }
///
/// impl_error_conversion!(MyError, Common);
/// ```
///
/// This generates `From<serde_json::Error>`, `From<toml::de::Error>` and
/// `From<std::io::Error>` for `MyError`, all routed through `CommonError`.
#[macro_export]
macro_rules! impl_error_conversion {
    ($error_type:ty, $variant:ident) => {
        impl From<serde_json::Error> for $error_type {
            fn from(err: serde_json::Error) -> Self {
                Self::$variant($crate::error::CommonError::from(err))
            }
        }

        impl From<toml::de::Error> for $error_type {
            fn from(err: toml::de::Error) -> Self {
                Self::$variant($crate::error::CommonError::from(err))
            }
        }

        impl From<std::io::Error> for $error_type {
            fn from(err: std::io::Error) -> Self {
                Self::$variant($crate::error::CommonError::from(err))
            }
        }
    };
}

/// Macro to implement ErrorClassification by delegating to CommonError
///
/// The caller does not need the trait in scope.
///
/// ```rust,ignore
/// impl_error_classification!(MyError, Common,
///     Self::Specific(_) => {
///         retryable: false,
///         severity: ErrorSeverity::Error,
///         critical: false,
///     }
/// );
/// ```
#[macro_export]
macro_rules! impl_error_classification {
    (
        $error_type:ty,
        $common_variant:ident
        $(,
            $variant:pat => {
                retryable: $retryable:expr,
                severity: $severity:expr,
                critical: $critical:expr
                $(,)?
            }
        )*
        $(,)?
    ) => {
        impl $crate::error::ErrorClassification for $error_type {
            fn is_retryable(&self) -> bool {
                match self {
                    Self::$common_variant(e) => {
                        $crate::error::ErrorClassification::is_retryable(e)
                    }
                    $(
                        $variant => $retryable,
                    )*
                }
            }

            fn severity(&self) -> $crate::error::ErrorSeverity {
                match self {
                    Self::$common_variant(e) => $crate::error::ErrorClassification::severity(e),
                    $(
                        $variant => $severity,
                    )*
                }
            }

            fn is_critical(&self) -> bool {
                match self {
                    Self::$common_variant(e) => $crate::error::ErrorClassification::is_critical(e),
                    $(
                        $variant => $critical,
                    )*
                }
            }
        }
    };
}
