// Salted SHA-512 fingerprints for normalized PII values

use sha2::{Digest, Sha512};
use tracing::warn;

use super::config::{HashConfig, SaltPolicy};
use super::error::{HashError, HashResult};
use super::fingerprint::Fingerprint;
use super::salt::MIN_SALT_LENGTH;

/// Upper bound of the salt prefix length.
const MAX_PREFIX_LENGTH: u32 = 127;
/// Step used to fold larger code points back into range. One less than the
/// bound, so 128 maps to 2 rather than 1.
const PREFIX_FOLD_STEP: u32 = 126;

/// Number of salt characters to prepend for an input starting with `code_point`.
///
/// Values above 127 are reduced by 126 until they fit, so 128 and 254 both
/// give 2 while 127 stays 127.
pub fn salt_prefix_len(code_point: u32) -> usize {
    let mut n = code_point;
    while n > MAX_PREFIX_LENGTH {
        n -= PREFIX_FOLD_STEP;
    }
    n as usize
}

#[derive(Debug)]
pub struct SecureHasher {
    config: HashConfig,
}

impl SecureHasher {
    /// Build a hasher, validating the salt against the configured policy.
    ///
    /// A strict configuration with a short salt fails here, at startup,
    /// instead of on every call.
    pub fn with_config(config: HashConfig) -> HashResult<Self> {
        config.validate()?;
        if !config.salt.meets_minimum() {
            warn!(
                salt_length = config.salt.len(),
                minimum = MIN_SALT_LENGTH,
                "Salt is shorter than the minimum; hashing degrades to passthrough"
            );
        }
        Ok(Self { config })
    }

    /// Fingerprint a non-empty value.
    ///
    /// Never falls back to plaintext, whatever the policy.
    pub fn fingerprint(&self, input: &str) -> HashResult<Fingerprint> {
        let Some(first) = input.chars().next() else {
            return Err(HashError::InvalidInput("cannot fingerprint an empty value".to_string()));
        };

        let salt = &self.config.salt;
        if !salt.meets_minimum() {
            return Err(HashError::SaltTooShort { length: salt.len(), minimum: MIN_SALT_LENGTH });
        }

        let prefix_len = salt_prefix_len(u32::from(first));
        let mut hasher = Sha512::new();
        hasher.update(salt.prefix(prefix_len));
        hasher.update(input.as_bytes());

        Ok(Fingerprint::from_digest(&hasher.finalize()))
    }

    /// Hash a value according to the configured [`SaltPolicy`].
    ///
    /// Empty input returns an empty string before the salt is looked at.
    /// With a short salt, `Strict` fails and `Passthrough` returns `input`
    /// unchanged after logging a warning.
    pub fn hash(&self, input: &str) -> HashResult<String> {
        if input.is_empty() {
            return Ok(String::new());
        }

        if self.is_passthrough() {
            warn!(
                salt_length = self.config.salt.len(),
                minimum = MIN_SALT_LENGTH,
                "Salt is too short, hashing not possible; returning input unchanged"
            );
            return Ok(input.to_string());
        }

        self.fingerprint(input).map(Fingerprint::into_string)
    }

    /// Hash every value, failing the whole batch on the first error.
    pub fn hash_many(&self, inputs: &[&str]) -> HashResult<Vec<String>> {
        inputs.iter().map(|input| self.hash(input)).collect()
    }

    /// True when hash calls return their input instead of a fingerprint.
    pub fn is_passthrough(&self) -> bool {
        self.config.policy == SaltPolicy::Passthrough && !self.config.salt.meets_minimum()
    }

    pub fn get_config(&self) -> &HashConfig {
        &self.config
    }
}
