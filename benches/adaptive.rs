mod common;

use std::time::Instant;

use adaptive_pipeline::builder::{AdaptationRule, AdaptiveCacheBuilder, GhostAdmission};
use adaptive_pipeline::policy::adaptive::AdaptiveCache;
use adaptive_pipeline::traits::CoreCache;
use common::workload::{Workload, WorkloadSpec, run_hit_rate};
use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};

fn filled(capacity: u64) -> AdaptiveCache<u64, u64> {
    let mut cache = AdaptiveCache::new(capacity as usize).unwrap();
    for i in 0..capacity {
        cache.put(i, i);
    }
    cache
}

fn bench_put_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("adaptive_policy");
    group.throughput(Throughput::Elements(2048));
    group.bench_function("put_get", |b| {
        b.iter_batched(
            || filled(1024),
            |mut cache| {
                for i in 0..1024u64 {
                    cache.put(std::hint::black_box(i + 10_000), i);
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_eviction_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("adaptive_policy");
    group.throughput(Throughput::Elements(4096));
    group.bench_function("eviction_churn", |b| {
        b.iter_batched(
            || filled(1024),
            |mut cache| {
                for i in 0..4096u64 {
                    cache.put(std::hint::black_box(10_000 + i), i);
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_ghost_readmission(c: &mut Criterion) {
    let mut group = c.benchmark_group("adaptive_policy");
    group.throughput(Throughput::Elements(1024));
    group.bench_function("ghost_readmission", |b| {
        b.iter_batched(
            || {
                let mut cache = filled(1024);
                // Original keys now sit in the recency ghost list.
                for i in 0..1024u64 {
                    cache.put(100_000 + i, i);
                }
                cache
            },
            |mut cache| {
                for i in 0..1024u64 {
                    cache.put(std::hint::black_box(i), i);
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_get_hit_ns(c: &mut Criterion) {
    c.bench_function("adaptive_get_hit_ns", |b| {
        b.iter_custom(|iters| {
            let capacity = 16_384u64;
            let mut cache = filled(capacity);
            let start = Instant::now();
            for i in 0..iters {
                let _ = std::hint::black_box(cache.get(&(i % capacity)));
            }
            start.elapsed()
        })
    });
}

fn bench_workload_hit_rate(c: &mut Criterion) {
    let mut group = c.benchmark_group("adaptive_workload_hit_rate");
    let operations = 200_000usize;
    group.throughput(Throughput::Elements(operations as u64));

    let workloads = [
        ("uniform", Workload::Uniform),
        (
            "hotset_90_10",
            Workload::Hotset {
                hot_fraction: 0.1,
                hot_prob: 0.9,
            },
        ),
        ("scan", Workload::Scan),
        (
            "scan_pollution",
            Workload::ScanPollution {
                hot_size: 2048,
                scan_every: 3,
            },
        ),
        ("zipfian", Workload::Zipfian { theta: 0.99 }),
    ];
    let configs = [
        ("unit", AdaptationRule::Unit, GhostAdmission::Recency),
        (
            "proportional",
            AdaptationRule::Proportional,
            GhostAdmission::Frequency,
        ),
    ];

    for (workload_name, workload) in workloads {
        for (config_name, rule, admission) in configs {
            let id = format!("{}/{}", workload_name, config_name);
            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut total = std::time::Duration::default();
                    for _ in 0..iters {
                        let mut cache = AdaptiveCacheBuilder::new(4096)
                            .adaptation(rule)
                            .ghost_admission(admission)
                            .build::<u64, u64>();
                        let mut generator = WorkloadSpec {
                            universe: 16_384,
                            workload,
                            seed: 42,
                        }
                        .generator();
                        let start = Instant::now();
                        let stats = run_hit_rate(&mut cache, &mut generator, operations);
                        let _ = std::hint::black_box(stats.hit_rate());
                        total += start.elapsed();
                    }
                    total
                })
            });
        }
    }
    group.finish();
}

criterion_group!(
    end_to_end,
    bench_put_get,
    bench_eviction_churn,
    bench_ghost_readmission
);
criterion_group!(micro, bench_get_hit_ns);
criterion_group!(workloads, bench_workload_hit_rate);
criterion_main!(end_to_end, micro, workloads);
