//! Criterion micro-benchmarks for record decoding.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use quickdraw_bench::encoded_corpus;
use quickdraw_codec::{decode_record, decode_records, DecodeOptions};
use quickdraw_test_utils::{anvil_fixture, encode_records};

/// Benchmark: decode the single anvil record.
fn bench_decode_one(c: &mut Criterion) {
    let bytes = encode_records(&[anvil_fixture()]);

    c.bench_function("decode_anvil_record", |b| {
        b.iter(|| {
            let mut cursor = bytes.as_slice();
            let record = decode_record(&mut cursor).unwrap();
            black_box(&record);
        });
    });
}

/// Benchmark: decode 1000 records, the default group bound.
fn bench_decode_default_bound(c: &mut Criterion) {
    let bytes = encoded_corpus(5_000, 1);
    let opts = DecodeOptions {
        max_records: Some(1000),
        recognized: None,
    };

    c.bench_function("decode_1000_of_5000", |b| {
        b.iter(|| {
            let outcome = decode_records(&mut bytes.as_slice(), &opts).unwrap();
            black_box(&outcome);
        });
    });
}

/// Benchmark: decode a full stream keeping only recognized records.
fn bench_decode_filtered(c: &mut Criterion) {
    let bytes = encoded_corpus(5_000, 2);
    let opts = DecodeOptions {
        max_records: None,
        recognized: Some(true),
    };

    c.bench_function("decode_5000_recognized_only", |b| {
        b.iter(|| {
            let outcome = decode_records(&mut bytes.as_slice(), &opts).unwrap();
            black_box(&outcome);
        });
    });
}

criterion_group!(
    benches,
    bench_decode_one,
    bench_decode_default_bound,
    bench_decode_filtered
);
criterion_main!(benches);
