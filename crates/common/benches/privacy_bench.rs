//! Privacy benchmarks for normalization and fingerprinting.
//!
//! These benches cover the hot paths of the privacy module: the three
//! normalizers, single-value hashing, and batch hashing.
//!
//! Run with: `cargo bench --bench privacy_bench -p anonymize-common --features
//! privacy`

use anonymize_common::privacy::hash::{HashConfig, SecureHasher};
use anonymize_common::privacy::normalize::{normalize_email, normalize_phone, normalize_string};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const BENCH_SALT_UNIT: &str = "privacy-bench-salt-0123456789abcdef";

type ValueBatch = (&'static str, Vec<String>);

fn build_hasher() -> SecureHasher {
    let config = HashConfig::new(BENCH_SALT_UNIT.repeat(4));
    SecureHasher::with_config(config).expect("failed to construct secure hasher for benchmark")
}

fn generate_email_batches() -> Vec<ValueBatch> {
    vec![
        ("batch_16", (0..16).map(|idx| format!("user-{idx}@privacy-bench.example")).collect()),
        ("batch_256", (0..256).map(|idx| format!("user-{idx}@privacy-bench.example")).collect()),
        (
            "batch_1024",
            (0..1024).map(|idx| format!("user-{idx}@privacy-bench.example")).collect(),
        ),
    ]
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("privacy_normalize");
    group.throughput(Throughput::Elements(1));

    group.bench_function("string", |b| {
        b.iter(|| black_box(normalize_string(black_box("  Jane Q. PUBLIC \t"))));
    });
    group.bench_function("email", |b| {
        b.iter(|| black_box(normalize_email(black_box(" Jane.Q.Public @ Example.COM "))));
    });
    group.bench_function("phone", |b| {
        b.iter(|| black_box(normalize_phone(black_box("+46 (0)70-123 45 67"))));
    });

    group.finish();
}

fn bench_hash_single_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("privacy_hash_single_value");
    let hasher = build_hasher();
    let inputs = vec![
        ("phone", "0046701234567".to_string()),
        ("email", "jane.q.public@example.com".to_string()),
        ("long_text", "lorem ipsum dolor sit amet ".repeat(16)),
    ];

    for (label, value) in &inputs {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("sha512", label), value, |b, value| {
            b.iter(|| {
                let hash = hasher.hash(black_box(value.as_str())).expect("hashing failed");
                black_box(hash);
            });
        });
    }

    group.finish();
}

fn bench_hash_many(c: &mut Criterion) {
    let mut group = c.benchmark_group("privacy_hash_many");
    let hasher = build_hasher();

    for (label, values) in &generate_email_batches() {
        group.throughput(Throughput::Elements(values.len() as u64));
        group.bench_with_input(BenchmarkId::new("sha512", label), values, |b, values| {
            let mut refs = Vec::with_capacity(values.len());
            b.iter(|| {
                refs.clear();
                refs.extend(values.iter().map(String::as_str));
                let hashes =
                    hasher.hash_many(black_box(refs.as_slice())).expect("batch hashing failed");
                black_box(hashes);
            });
        });
    }

    group.finish();
}

criterion_group!(privacy_benches, bench_normalize, bench_hash_single_value, bench_hash_many);
criterion_main!(privacy_benches);
