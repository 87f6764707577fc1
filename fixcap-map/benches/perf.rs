//! Benchmark: fixcap-map performance
//!
//! Measures set/get/delete against `std::collections::HashMap` and compares the
//! default hasher with the polynomial one.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fixcap_map::{FixedCapacityHashMap, Polynomial31};
use std::collections::HashMap as StdHashMap;

const SIZES: &[usize] = &[1_000, 10_000, 100_000];

fn keys(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("key{}", i)).collect()
}

/// Benchmark: fill a map to capacity
fn bench_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("set");

    for &size in SIZES {
        let keys = keys(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("fixcap-map", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = FixedCapacityHashMap::new(keys.len()).unwrap();
                for (i, k) in keys.iter().enumerate() {
                    map.set(black_box(k), black_box(i));
                }
                map
            });
        });

        group.bench_with_input(
            BenchmarkId::new("fixcap-map/poly31", size),
            &keys,
            |b, keys| {
                b.iter(|| {
                    let mut map = FixedCapacityHashMap::with_hasher(keys.len(), Polynomial31).unwrap();
                    for (i, k) in keys.iter().enumerate() {
                        map.set(black_box(k), black_box(i));
                    }
                    map
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("std", size), &keys, |b, keys| {
            b.iter(|| {
                let mut map = StdHashMap::with_capacity(keys.len());
                for (i, k) in keys.iter().enumerate() {
                    map.insert(black_box(k.clone()), black_box(i));
                }
                map
            });
        });
    }

    group.finish();
}

/// Benchmark: lookups on a full map
fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    for &size in SIZES {
        let keys = keys(size);
        group.throughput(Throughput::Elements(size as u64));

        let mut map = FixedCapacityHashMap::new(size).unwrap();
        let mut std_map = StdHashMap::with_capacity(size);
        for (i, k) in keys.iter().enumerate() {
            map.set(k, i);
            std_map.insert(k.clone(), i);
        }

        group.bench_with_input(BenchmarkId::new("fixcap-map", size), &keys, |b, keys| {
            b.iter(|| {
                let mut sum = 0;
                for k in keys {
                    if let Some(v) = map.get(black_box(k)) {
                        sum += v;
                    }
                }
                sum
            });
        });

        group.bench_with_input(BenchmarkId::new("std", size), &keys, |b, keys| {
            b.iter(|| {
                let mut sum = 0;
                for k in keys {
                    if let Some(v) = std_map.get(black_box(k.as_str())) {
                        sum += v;
                    }
                }
                sum
            });
        });
    }

    group.finish();
}

/// Benchmark: delete then re-insert every key
fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");

    for &size in SIZES {
        let keys = keys(size);
        group.throughput(Throughput::Elements(size as u64 * 2));

        let mut map = FixedCapacityHashMap::new(size).unwrap();
        for (i, k) in keys.iter().enumerate() {
            map.set(k, i);
        }

        group.bench_with_input(BenchmarkId::new("fixcap-map", size), &keys, |b, keys| {
            b.iter(|| {
                for (i, k) in keys.iter().enumerate() {
                    let v = map.delete(black_box(k)).unwrap_or(i);
                    map.set(k, v);
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_set, bench_get, bench_churn);
criterion_main!(benches);
