//! Benchmarks for composed pipelines.
//!
//! Run with: cargo bench -p melbi-seq-core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use melbi_seq_core::{
    Sequence, aggregate_with, append, chunk, concat, last, order, order_by_descending, seq,
    to_vec,
};

fn input(size: usize) -> Vec<i64> {
    (0..size as i64).map(|i| (i * 7919) % 1000).collect()
}

fn bench_order(c: &mut Criterion) {
    let mut group = c.benchmark_group("order");
    for size in [100, 10_000] {
        let data = input(size);
        group.bench_with_input(BenchmarkId::new("ascending", size), &data, |b, data| {
            b.iter(|| seq(black_box(data)) | order() | to_vec())
        });
        group.bench_with_input(BenchmarkId::new("by_key_desc", size), &data, |b, data| {
            b.iter(|| seq(black_box(data)) | order_by_descending(|x: &&i64| *x % 10) | to_vec())
        });
    }
    group.finish();
}

fn bench_chunk(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunk");
    for size in [100, 10_000] {
        let data = input(size);
        group.bench_with_input(BenchmarkId::new("sum_chunks", size), &data, |b, data| {
            b.iter(|| {
                let view = seq(black_box(data)) | chunk(16).unwrap();
                view.items()
                    .map(|part| part.items().copied().sum::<i64>())
                    .sum::<i64>()
            })
        });
    }
    group.finish();
}

fn bench_composed(c: &mut Criterion) {
    let data = input(10_000);
    c.bench_function("concat_append_sum", |b| {
        b.iter(|| {
            seq(black_box(&data))
                | concat(&data)
                | append(&0)
                | aggregate_with(0i64, |acc: i64, x: &i64| acc + x)
        })
    });
    c.bench_function("last_of_chunks", |b| {
        b.iter(|| {
            (seq(black_box(&data)) | chunk(64).unwrap() | last())
                .map(|part| part.len())
        })
    });
}

criterion_group!(benches, bench_order, bench_chunk, bench_composed);
criterion_main!(benches);
