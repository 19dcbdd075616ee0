use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{HashError, HashResult};
use super::salt::{Salt, MIN_SALT_LENGTH};
use crate::error::CommonError;

/// What to do when the salt is shorter than [`MIN_SALT_LENGTH`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaltPolicy {
    /// Refuse to build a hasher; every hash call fails with `SaltTooShort`.
    #[default]
    Strict,
    /// Return the input unchanged and emit a warning. Hashed output may be
    /// plaintext under this policy.
    Passthrough,
}

impl fmt::Display for SaltPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Passthrough => write!(f, "passthrough"),
        }
    }
}

impl FromStr for SaltPolicy {
    type Err = CommonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "passthrough" => Ok(Self::Passthrough),
            other => Err(CommonError::config_field(
                "salt_policy",
                format!("unknown value '{}', expected 'strict' or 'passthrough'", other),
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct HashConfig {
    pub salt: Salt,
    pub policy: SaltPolicy,
}

impl HashConfig {
    /// Strict configuration around `salt`
    pub fn new(salt: impl Into<Salt>) -> Self {
        Self { salt: salt.into(), policy: SaltPolicy::Strict }
    }

    pub fn with_policy(salt: impl Into<Salt>, policy: SaltPolicy) -> Self {
        Self { salt: salt.into(), policy }
    }

    /// Check the salt against the minimum length.
    ///
    /// Only a strict policy turns a short salt into an error; passthrough
    /// configurations always validate.
    pub fn validate(&self) -> HashResult<()> {
        if self.policy == SaltPolicy::Strict && !self.salt.meets_minimum() {
            return Err(HashError::SaltTooShort {
                length: self.salt.len(),
                minimum: MIN_SALT_LENGTH,
            });
        }
        Ok(())
    }
}
