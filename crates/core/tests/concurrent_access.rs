//! Racing threads share one lazily initialized anonymizer.

mod support;

use std::sync::{Arc, Barrier};
use std::thread;

use anonymize_core::{global, normalize_and_anonymize_phone};
use support::{fixture_salt_value, init_tracing, SWEDISH_PHONE_FINGERPRINT};

const THREADS: usize = 8;

#[test]
fn test_concurrent_first_use_yields_identical_fingerprints() {
    init_tracing();
    std::env::remove_var("ANONYMIZE_SALT_VAR");
    std::env::remove_var("ANONYMIZE_SALT_POLICY");
    std::env::set_var("SALT", fixture_salt_value());

    let barrier = Arc::new(Barrier::new(THREADS));
    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let fingerprint = normalize_and_anonymize_phone("+46 70 123 45 67").unwrap();
                let anonymizer = global::get().unwrap() as *const _ as usize;
                (fingerprint, anonymizer)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let first_instance = results[0].1;
    for (fingerprint, instance) in results {
        assert_eq!(fingerprint, SWEDISH_PHONE_FINGERPRINT);
        assert_eq!(instance, first_instance);
    }
}
