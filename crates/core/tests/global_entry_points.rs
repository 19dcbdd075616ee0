//! Free-function entry points against an explicitly installed anonymizer.

mod support;

use anonymize_common::testing::assert_fingerprint_shape;
use anonymize_core::{
    anonymize_email, anonymize_phone, anonymize_string, email, global,
    normalize_and_anonymize_email, normalize_and_anonymize_phone, normalize_and_anonymize_string,
    normalize_email, normalize_phone, normalize_string, phone, string, AnonymizeError,
};
use support::{
    fixture_config, init_tracing, FOO_BAR_EMAIL_FINGERPRINT, FOO_BAR_FINGERPRINT,
    SWEDISH_PHONE_FINGERPRINT,
};

// One test so the install order is deterministic within this process.
#[test]
fn test_entry_points_share_installed_anonymizer() {
    init_tracing();

    assert!(!global::is_initialized());
    let installed = global::init(fixture_config()).unwrap();
    assert!(global::is_initialized());
    assert!(!installed.is_passthrough());

    // Normalization
    assert_eq!(normalize_string("  Foo BAR\t"), "foo bar");
    assert_eq!(normalize_email(" Foo.Bar @Example.com"), "foo.bar@example.com");
    assert_eq!(normalize_phone("+46 70-123 45 67"), "0046701234567");

    // Anonymize as-is
    assert_eq!(anonymize_email("foo.bar@example.com").unwrap(), FOO_BAR_EMAIL_FINGERPRINT);
    assert_eq!(anonymize_phone("0046701234567").unwrap(), SWEDISH_PHONE_FINGERPRINT);
    assert_eq!(anonymize_string("foo bar").unwrap(), FOO_BAR_FINGERPRINT);
    assert_ne!(anonymize_string("Foo Bar").unwrap(), FOO_BAR_FINGERPRINT);

    // Normalize then anonymize
    assert_eq!(
        normalize_and_anonymize_email(" FOO.bar@EXAMPLE.com ").unwrap(),
        FOO_BAR_EMAIL_FINGERPRINT
    );
    assert_eq!(
        normalize_and_anonymize_phone("+46 (70) 123 45 67").unwrap(),
        SWEDISH_PHONE_FINGERPRINT
    );
    assert_eq!(normalize_and_anonymize_string(" FOO bar ").unwrap(), FOO_BAR_FINGERPRINT);

    // Boolean convenience forms
    assert_eq!(email("Foo.Bar@Example.com", true).unwrap(), FOO_BAR_EMAIL_FINGERPRINT);
    assert_eq!(phone("+46 70", false).unwrap(), "004670");
    assert_fingerprint_shape(&string("Jane", true).unwrap());

    // Empty input stays empty everywhere
    assert_eq!(anonymize_string("").unwrap(), "");
    assert_eq!(normalize_and_anonymize_phone("").unwrap(), "");

    // The installed anonymizer stays in place
    let err = global::init(fixture_config()).unwrap_err();
    assert!(matches!(err, AnonymizeError::AlreadyInitialized));
    assert!(std::ptr::eq(global::get().unwrap(), installed));
}
