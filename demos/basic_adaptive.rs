use adaptive_pipeline::create_cache;
use adaptive_pipeline::traits::{CoreCache, ReadOnlyCache};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // RUST_LOG=adaptive_pipeline=trace shows evictions and split changes.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "adaptive_pipeline=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut cache = match create_cache::<u32, String>(2) {
        Ok(cache) => cache,
        Err(err) => {
            eprintln!("{}", err);
            return;
        },
    };

    cache.put(1, "alpha".to_string());
    cache.get(&1);
    cache.put(2, "beta".to_string());
    cache.put(3, "gamma".to_string());

    println!("contains 1? {}", cache.contains(&1));
    println!("contains 2? {}", cache.contains(&2));

    cache.put(2, "beta again".to_string());
    println!("split after ghost hit: {}", cache.split());
    println!("{}", cache);
}

// Expected output:
// contains 1? true
// contains 2? false
// split after ghost hit: 1
// AdaptiveCache(maxsize=2, currsize=2, recency=2, frequency=0, split=1, ghosts=0/1)
//
// Explanation: key 1 was read twice and lives in the frequency list, so the
// recency list gives up key 2 when key 3 arrives. Writing key 2 again hits
// the recency ghost list and raises the split to 1. The recency list is now
// within its target, so the frequency list pays for the insert and key 1
// moves to the frequency ghost list.
