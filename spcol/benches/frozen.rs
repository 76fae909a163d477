//! Benchmarks for frozen container operations

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use spcol::{FrozenBuffer, FrozenVec, SearchSide};

fn bench_search_sorted(c: &mut Criterion) {
    let mut rng = rand::thread_rng();
    let mut values: Vec<f64> = (0..100_000).map(|_| rng.gen::<f64>() * 1e6).collect();
    values.sort_by(|a, b| a.partial_cmp(b).unwrap());
    let buffer = FrozenBuffer::from_vec(values);

    c.bench_function("search_sorted_100k", |b| {
        b.iter(|| buffer.search_sorted(black_box(5e5), SearchSide::Left, None))
    });
}

fn bench_union(c: &mut Criterion) {
    let left: FrozenVec<u64> = (0..10_000).collect();
    let right: Vec<u64> = (10_000..20_000).collect();

    c.bench_function("union_10k", |b| b.iter(|| left.union(black_box(&right))));
}

fn bench_difference(c: &mut Criterion) {
    let left: FrozenVec<u64> = (0..1_000).collect();
    let right: Vec<u64> = (500..600).collect();

    c.bench_function("difference_1k", |b| {
        b.iter(|| left.difference(black_box(&right)))
    });
}

criterion_group!(
    benches,
    bench_search_sorted,
    bench_union,
    bench_difference
);
criterion_main!(benches);
