//! Configuration for the process-wide anonymizer
//!
//! The salt itself only ever comes from the environment. Non-secret knobs
//! (which variable holds the salt, the short-salt policy) can come from the
//! environment or from a settings file.

pub mod loader;

use anonymize_common::error::CommonError;
use anonymize_common::privacy::SaltPolicy;
use serde::{Deserialize, Serialize};

/// Environment variable holding the salt unless overridden.
pub const DEFAULT_SALT_VAR: &str = "SALT";

/// Non-secret anonymizer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Name of the environment variable that holds the salt
    pub salt_var: String,
    pub salt_policy: SaltPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self { salt_var: DEFAULT_SALT_VAR.to_string(), salt_policy: SaltPolicy::Strict }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), CommonError> {
        if self.salt_var.trim().is_empty() {
            return Err(CommonError::config_field("salt_var", "must not be empty"));
        }
        Ok(())
    }
}
