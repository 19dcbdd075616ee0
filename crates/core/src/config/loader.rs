//! Configuration loader
//!
//! Builds a [`HashConfig`] from the environment, optionally guided by a
//! settings file.
//!
//! ## Environment Variables
//! - `SALT`: the secret salt (at least 128 characters)
//! - `ANONYMIZE_SALT_VAR`: read the salt from this variable instead of `SALT`
//! - `ANONYMIZE_SALT_POLICY`: `strict` (default) or `passthrough`
//!
//! ## Settings Files
//! TOML or JSON, detected by extension:
//!
//! ```toml
//! salt_var = "CRM_EXPORT_SALT"
//! salt_policy = "strict"
//! ```

use std::path::Path;

use anonymize_common::error::CommonError;
use anonymize_common::privacy::{HashConfig, HashError, Salt, SaltPolicy};
use tracing::{debug, info, instrument, warn};

use super::{Settings, DEFAULT_SALT_VAR};
use crate::error::AnonymizeResult;

/// Overrides the name of the variable holding the salt.
pub const SALT_VAR_OVERRIDE: &str = "ANONYMIZE_SALT_VAR";
/// Selects the short-salt policy.
pub const SALT_POLICY_VAR: &str = "ANONYMIZE_SALT_POLICY";

/// Load configuration, reading a `.env` file first if one exists
///
/// Variables already present in the environment win over `.env` entries.
///
/// # Errors
/// Same as [`load_from_env`].
pub fn load() -> AnonymizeResult<HashConfig> {
    match dotenvy::dotenv() {
        Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!(error = %e, "Could not load .env file"),
    }
    load_from_env()
}

/// Load configuration from environment variables only
///
/// # Errors
/// - `HashError::SaltMissing` if the salt variable is unset
/// - `CommonError::Config` if the policy is unknown or the salt is not
///   valid Unicode
pub fn load_from_env() -> AnonymizeResult<HashConfig> {
    let settings = settings_from_env()?;
    resolve(&settings)
}

/// Load settings from a file and the salt from the variable it names
///
/// # Errors
/// Fails if the file cannot be read or parsed, or for the reasons listed on
/// [`load_from_env`].
pub fn load_from_file(path: &Path) -> AnonymizeResult<HashConfig> {
    let settings = load_settings_from_file(path)?;
    resolve(&settings)
}

/// Read [`Settings`] from the override variables, falling back to defaults
pub fn settings_from_env() -> AnonymizeResult<Settings> {
    let salt_var =
        std::env::var(SALT_VAR_OVERRIDE).unwrap_or_else(|_| DEFAULT_SALT_VAR.to_string());
    let salt_policy = match std::env::var(SALT_POLICY_VAR) {
        Ok(value) => value.parse::<SaltPolicy>()?,
        Err(_) => SaltPolicy::default(),
    };

    let settings = Settings { salt_var, salt_policy };
    settings.validate()?;
    Ok(settings)
}

/// Parse a TOML or JSON settings file
pub fn load_settings_from_file(path: &Path) -> AnonymizeResult<Settings> {
    if !path.exists() {
        return Err(CommonError::config(format!(
            "Settings file not found: {}",
            path.display()
        ))
        .into());
    }

    info!(path = %path.display(), "Loading anonymizer settings from file");
    let contents = std::fs::read_to_string(path)?;
    let settings = parse_settings(&contents, path)?;
    settings.validate()?;
    Ok(settings)
}

fn parse_settings(contents: &str, path: &Path) -> AnonymizeResult<Settings> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => Ok(toml::from_str(contents)?),
        "json" => Ok(serde_json::from_str(contents)?),
        _ => Err(CommonError::config(format!("Unsupported settings format: {}", extension)).into()),
    }
}

/// Read the salt named by `settings` and pair it with the policy
///
/// The salt length is not checked here; that happens when the hasher is
/// built, so the policy decides what a short salt means.
#[instrument(skip_all, fields(salt_var = %settings.salt_var, policy = %settings.salt_policy))]
pub fn resolve(settings: &Settings) -> AnonymizeResult<HashConfig> {
    let salt = match std::env::var(&settings.salt_var) {
        Ok(value) => Salt::new(value),
        Err(std::env::VarError::NotPresent) => {
            warn!("Salt environment variable is not set");
            return Err(HashError::SaltMissing(settings.salt_var.clone()).into());
        }
        Err(std::env::VarError::NotUnicode(_)) => {
            return Err(CommonError::config_field(
                settings.salt_var.clone(),
                "salt is not valid Unicode",
            )
            .into());
        }
    };

    debug!(salt_length = salt.len(), "Salt loaded from environment");
    Ok(HashConfig::with_policy(salt, settings.salt_policy))
}
