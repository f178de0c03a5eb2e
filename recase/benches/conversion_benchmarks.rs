//! Performance benchmarks for case conversion
//!
//! Run with: cargo bench --bench conversion_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use recase::{normalize, Case, Converter};
use std::hint::black_box;

/// Generate identifier-heavy text of roughly `size` bytes
fn generate_text(size: usize) -> String {
    let base = "parseXMLHttpRequest user_id --Content-Type-- SOME_CONSTANT v2Api ";
    let repeat_count = size / base.len() + 1;

    let mut text = base.repeat(repeat_count);
    text.truncate(size);
    text
}

fn bench_normalize_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    for size in [64, 1024, 10_240, 102_400] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("space", size), &text, |b, text| {
            b.iter(|| normalize(black_box(text.as_str()), None));
        });
    }

    group.finish();
}

fn bench_cases(c: &mut Criterion) {
    let mut group = c.benchmark_group("cases");
    let text = generate_text(1024);

    for case in Case::ALL {
        let converter = Converter::new(case);
        group.bench_with_input(BenchmarkId::new("convert", case), &text, |b, text| {
            b.iter(|| converter.convert(black_box(text.as_str())));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize_sizes, bench_cases);
criterion_main!(benches);
