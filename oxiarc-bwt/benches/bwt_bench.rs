//! Benchmarks for the block-sorting transforms.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use oxiarc_bwt::{SortStrategy, bwt, mtf};
use std::hint::black_box;

// Comparison sort is O(n² log n) on repetitive data, so the repeated
// pattern stays small for that strategy.
fn test_cases() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("small_text", generate_text(1024)),
        ("medium_text", generate_text(64 * 1024)),
        ("small_random", generate_random(1024)),
        ("medium_random", generate_random(64 * 1024)),
        ("small_repeated", generate_repeated(1024)),
        ("medium_repeated", generate_repeated(8 * 1024)),
    ]
}

fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("bwt_forward");
    for (name, data) in test_cases() {
        group.throughput(Throughput::Bytes(data.len() as u64));
        for (label, strategy) in [
            ("comparison", SortStrategy::Comparison),
            ("prefix_doubling", SortStrategy::PrefixDoubling),
        ] {
            group.bench_with_input(BenchmarkId::new(label, name), &data, |b, data| {
                b.iter(|| bwt::transform_with_strategy(black_box(data), strategy))
            });
        }
    }
    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("bwt_inverse");
    for (name, data) in test_cases() {
        let output = bwt::transform_with_strategy(&data, SortStrategy::PrefixDoubling)
            .expect("non-empty input");
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("unchecked", name), &output, |b, o| {
            b.iter(|| bwt::inverse_transform(o.first, black_box(&o.last)))
        });
        group.bench_with_input(BenchmarkId::new("checked", name), &output, |b, o| {
            b.iter(|| bwt::inverse_transform_checked(o.first, black_box(&o.last)))
        });
    }
    group.finish();
}

fn bench_mtf(c: &mut Criterion) {
    let mut group = c.benchmark_group("mtf");
    for (name, data) in test_cases() {
        let encoded = mtf::transform(&data);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::new("encode", name), &data, |b, d| {
            b.iter(|| mtf::transform(black_box(d)))
        });
        group.bench_with_input(BenchmarkId::new("decode", name), &encoded, |b, d| {
            b.iter(|| mtf::inverse_transform(black_box(d)))
        });
    }
    group.finish();
}

fn generate_text(size: usize) -> Vec<u8> {
    let words: &[&[u8]] = &[
        b"the", b"quick", b"brown", b"fox", b"jumps", b"over", b"lazy", b"dog", b"and", b"runs",
        b"through", b"forest", b"near", b"river", b"under", b"blue", b"sky",
    ];

    let mut data = Vec::with_capacity(size);
    let mut seed = 42u32;

    while data.len() < size {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        let word_idx = (seed as usize) % words.len();
        data.extend_from_slice(words[word_idx]);
        data.push(b' ');
    }
    data.truncate(size);
    data
}

fn generate_random(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut seed = 12345u32;
    for _ in 0..size {
        seed = seed.wrapping_mul(1103515245).wrapping_add(12345);
        data.push((seed >> 16) as u8);
    }
    data
}

fn generate_repeated(size: usize) -> Vec<u8> {
    let pattern = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let mut data = Vec::with_capacity(size);
    while data.len() < size {
        data.extend_from_slice(pattern);
    }
    data.truncate(size);
    data
}

criterion_group!(benches, bench_forward, bench_inverse, bench_mtf);
criterion_main!(benches);
