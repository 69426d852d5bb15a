//! LookupTable benchmark.
//!
//! Measures point lookups and incremental construction, with `BTreeMap` as
//! the baseline. Puts shift the tail of the backing `Vec`, so construction
//! from descending keys is the worst case and ascending keys the best.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use morse_lookup::lookup::LookupTable;
use std::collections::BTreeMap;
use std::hint::black_box;

const SIZES: [u32; 3] = [64, 1000, 10000];

fn build_table(size: u32) -> LookupTable<u32, u32> {
    (0..size).map(|key| (key, key)).collect()
}

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lookup_table_get");

    for size in SIZES {
        let table = build_table(size);
        let model: BTreeMap<u32, u32> = (0..size).map(|key| (key, key)).collect();

        group.bench_with_input(BenchmarkId::new("LookupTable", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for key in (0..size).step_by(7) {
                    black_box(table.get(black_box(&key)));
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                for key in (0..size).step_by(7) {
                    black_box(model.get(black_box(&key)));
                }
            });
        });
    }

    group.finish();
}

fn benchmark_put(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lookup_table_put");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("ascending", size), &size, |bencher, &size| {
            bencher.iter_batched(
                LookupTable::<u32, u32>::new,
                |mut table| {
                    for key in 0..size {
                        table.put(key, key);
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("descending", size), &size, |bencher, &size| {
            bencher.iter_batched(
                LookupTable::<u32, u32>::new,
                |mut table| {
                    for key in (0..size).rev() {
                        table.put(key, key);
                    }
                    black_box(table)
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("lookup_table_remove");

    for size in SIZES {
        let base = build_table(size);
        group.bench_with_input(BenchmarkId::new("remove_all", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || base.clone(),
                |mut table| {
                    for key in 0..size {
                        black_box(table.remove(&key));
                    }
                    table
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_get, benchmark_put, benchmark_remove);
criterion_main!(benches);
