//! Process-wide anonymizer
//!
//! The free functions in [`crate::api`] share one [`Anonymizer`], so the salt
//! is read and validated once per process. Call [`init`] or [`init_from_env`]
//! at startup to surface a bad salt immediately; otherwise the first hashing
//! call initializes from the environment.

use once_cell::sync::OnceCell;
use tracing::info;

use crate::anonymizer::Anonymizer;
use crate::error::{AnonymizeError, AnonymizeResult};
use anonymize_common::privacy::HashConfig;

static ANONYMIZER: OnceCell<Anonymizer> = OnceCell::new();

/// Install an anonymizer built from `config`.
///
/// # Errors
/// - `AnonymizeError::AlreadyInitialized` if one is already installed
/// - `HashError::SaltTooShort` for a short salt under the strict policy
pub fn init(config: HashConfig) -> AnonymizeResult<&'static Anonymizer> {
    if ANONYMIZER.get().is_some() {
        return Err(AnonymizeError::AlreadyInitialized);
    }
    let anonymizer = Anonymizer::new(config)?;
    // Another thread may have won the race since the check above.
    let installed =
        ANONYMIZER.try_insert(anonymizer).map_err(|_| AnonymizeError::AlreadyInitialized)?;
    info!("Process-wide anonymizer installed");
    Ok(installed)
}

/// Install an anonymizer configured from the environment.
pub fn init_from_env() -> AnonymizeResult<&'static Anonymizer> {
    init(crate::config::loader::load()?)
}

/// The installed anonymizer, initializing from the environment on first use.
///
/// A failed initialization is not cached; the next call tries again.
pub fn get() -> AnonymizeResult<&'static Anonymizer> {
    ANONYMIZER.get_or_try_init(|| {
        info!("Initializing process-wide anonymizer from environment");
        Anonymizer::from_env()
    })
}

pub fn is_initialized() -> bool {
    ANONYMIZER.get().is_some()
}
