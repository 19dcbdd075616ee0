//! Custom assertions for testing

// These assertions are designed to panic on failure
#![allow(clippy::missing_panics_doc)]

/// Assert that an error contains a specific substring
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "test-utils")]
/// # {
/// let result: Result<(), String> = Err("Salt is not set".to_string());
/// anonymize_common::assert_error_contains!(result, "not set");
/// # }
/// ```
#[macro_export]
macro_rules! assert_error_contains {
    ($result:expr, $substring:expr) => {
        match &$result {
            Ok(_) => panic!("Expected error but got Ok"),
            Err(e) => {
                let error_msg = format!("{}", e);
                assert!(
                    error_msg.contains($substring),
                    "Error message '{}' does not contain '{}'",
                    error_msg,
                    $substring
                );
            }
        }
    };
}

/// Assert that `value` looks like a SHA-512 fingerprint: 128 lowercase hex
/// characters.
pub fn assert_fingerprint_shape(value: &str) {
    assert_eq!(value.len(), 128, "fingerprint '{}' is not 128 characters", value);
    assert!(
        value.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')),
        "fingerprint '{}' is not lowercase hex",
        value
    );
}
