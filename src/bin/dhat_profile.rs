//! DHAT heap profiler for the adaptive cache.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use adaptive_pipeline::builder::{AdaptationRule, AdaptiveCacheBuilder, GhostAdmission};
use adaptive_pipeline::policy::adaptive::AdaptiveCache;
use adaptive_pipeline::traits::{CoreCache, ReadOnlyCache};

const CAPACITY: usize = 4096;
const OPERATIONS: usize = 100_000;
const UNIVERSE: u64 = 16_384;

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// 90% of accesses hit 10% of keys.
fn hotset_workload(cache: &mut AdaptiveCache<u64, Vec<u8>>, seed: u64) {
    let mut rng = XorShift64::new(seed);
    let hot_size = UNIVERSE / 10;
    for _ in 0..OPERATIONS {
        let key = if rng.next_u64() % 10 < 9 {
            rng.next_u64() % hot_size
        } else {
            hot_size + rng.next_u64() % (UNIVERSE - hot_size)
        };
        if cache.get(&key).is_none() {
            cache.put(key, vec![0u8; 64]);
        }
    }
}

fn scan_workload(cache: &mut AdaptiveCache<u64, Vec<u8>>) {
    for i in 0..OPERATIONS / 2 {
        let key = (i as u64) % UNIVERSE;
        if cache.get(&key).is_none() {
            cache.put(key, vec![0u8; 64]);
        }
    }
}

/// Alternates a scan and a hot set so ghost hits keep moving the split.
fn ghost_churn(cache: &mut AdaptiveCache<u64, Vec<u8>>) {
    for round in 0..8u64 {
        for i in 0..CAPACITY as u64 {
            cache.put(1_000_000 + round * 10_000 + i, vec![0u8; 16]);
        }
        for i in 0..(CAPACITY as u64) / 2 {
            cache.put(i, vec![0u8; 16]);
        }
    }
}

fn profile(name: &str, rule: AdaptationRule, admission: GhostAdmission) {
    println!("=== Profiling {} ===", name);
    let mut cache = AdaptiveCacheBuilder::new(CAPACITY)
        .adaptation(rule)
        .ghost_admission(admission)
        .build::<u64, Vec<u8>>();

    for i in 0..CAPACITY as u64 {
        cache.put(i, vec![0u8; 64]);
    }
    hotset_workload(&mut cache, 42);
    scan_workload(&mut cache);
    ghost_churn(&mut cache);

    println!(
        "  Final size: {}, split: {}, ghosts: {}/{}",
        cache.len(),
        cache.split(),
        cache.recency_ghost_len(),
        cache.frequency_ghost_len()
    );
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("Adaptive Cache DHAT Heap Profiling");
    println!("==================================\n");

    profile("unit/recency", AdaptationRule::Unit, GhostAdmission::Recency);
    profile(
        "proportional/frequency",
        AdaptationRule::Proportional,
        GhostAdmission::Frequency,
    );

    println!("\n==================================");
    println!("Profiling complete!");
    println!(
        "View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>"
    );
}
