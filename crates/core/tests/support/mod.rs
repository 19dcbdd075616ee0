//! Shared helpers for `anonymize-core` integration tests.
//!
//! Each integration test file is its own process, so each one gets a fresh
//! process-wide anonymizer.

#![allow(dead_code)]

use anonymize_common::testing::fixture_salt;
use anonymize_core::HashConfig;

/// Fingerprint of `foo.bar@example.com` under [`fixture_salt`].
pub const FOO_BAR_EMAIL_FINGERPRINT: &str = "a3c719f8d945f34096fefb64ffae9a9b517515648f64878f5253f10d4460a09bd9993d03c6e994492db2de747ad4576a75591977baaa34dde21f7d1aee167c5c";

/// Fingerprint of `0046701234567` under [`fixture_salt`].
pub const SWEDISH_PHONE_FINGERPRINT: &str = "31368c5a1d31c25bb686521d57cd4328a9836f7dc8aff8a5a548788e1144a6e6260eb0f1b17d708259aee38876cc51313886185bf83668753aab8fc7e52aed40";

/// Fingerprint of `foo bar` under [`fixture_salt`].
pub const FOO_BAR_FINGERPRINT: &str = "3ca171debee4166069c805592a7a040f3a7ca506e66500cfc16ac3de96042c792534883b11b53a69fc7bbe03ac20f9885b71a1397600c3b77d5232ad13a557dd";

/// Route log output through the test harness.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn fixture_config() -> HashConfig {
    HashConfig::new(fixture_salt())
}

/// The fixture salt as a plain string, for setting `SALT`.
pub fn fixture_salt_value() -> String {
    fixture_salt().expose().to_string()
}
