//! Test fixture generators
//!
//! For deterministic tests use [`fixture_salt`]; [`random_salt`] is for
//! checks that must not depend on a particular secret.

use rand::Rng;

use crate::privacy::hash::{Salt, MIN_SALT_LENGTH};

/// Deterministic minimum-length salt: `abc...xyzabc...` for 128 characters
///
/// # Examples
///
/// ```
/// use anonymize_common::testing::fixtures::fixture_salt;
///
/// assert!(fixture_salt().expose().starts_with("abcdefghijklmnopqrstuvwxyzabc"));
/// ```
pub fn fixture_salt() -> Salt {
    let value: String =
        (0..MIN_SALT_LENGTH).map(|i| char::from(b'a' + (i % 26) as u8)).collect();
    Salt::new(value)
}

/// Random alphanumeric salt of `len` characters
pub fn random_salt(len: usize) -> Salt {
    use rand::distributions::Alphanumeric;

    let value: String =
        rand::thread_rng().sample_iter(&Alphanumeric).take(len).map(char::from).collect();
    Salt::new(value)
}

/// Pairs of raw email inputs and their normalized form
pub fn sample_emails() -> Vec<(&'static str, &'static str)> {
    vec![
        (" Foo.BAR@Example.com ", "foo.bar@example.com"),
        ("JANE.DOE @ MAIL.SE", "jane.doe@mail.se"),
        ("first\tlast@example.org", "firstlast@example.org"),
        ("already@normal.net", "already@normal.net"),
    ]
}

/// Pairs of raw phone inputs and their normalized form
pub fn sample_phones() -> Vec<(&'static str, &'static str)> {
    vec![
        ("+46 70-123 45 67", "0046701234567"),
        ("0046701234567", "0046701234567"),
        ("(+1) 415-555-2671", "0014155552671"),
        ("070+123 45 67", "0701234567"),
    ]
}
