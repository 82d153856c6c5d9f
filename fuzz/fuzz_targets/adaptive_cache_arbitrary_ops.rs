#![no_main]

use adaptive_pipeline::builder::{AdaptationRule, AdaptiveCacheBuilder, GhostAdmission};
use adaptive_pipeline::traits::{CoreCache, MutableCache, ReadOnlyCache};
use libfuzzer_sys::fuzz_target;

// Random operation sequences against a cache whose configuration comes from
// the first bytes of the input.
fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    let capacity = (data[0] as usize) % 32 + 1;
    let ghost_capacity = (data[1] as usize) % 64;
    let rule = if data[2] & 1 == 0 {
        AdaptationRule::Unit
    } else {
        AdaptationRule::Proportional
    };
    let admission = if data[2] & 2 == 0 {
        GhostAdmission::Recency
    } else {
        GhostAdmission::Frequency
    };
    let Ok(mut cache) = AdaptiveCacheBuilder::new(capacity)
        .ghost_capacity(ghost_capacity)
        .adaptation(rule)
        .ghost_admission(admission)
        .try_build::<u8, u32>()
    else {
        return;
    };

    for (step, pair) in data[3..].chunks_exact(2).enumerate() {
        let key = pair[1] % 96;
        match pair[0] % 6 {
            0 | 1 => {
                cache.put(key, step as u32);
                assert_eq!(cache.peek(&key), Some(&(step as u32)));
            },
            2 | 3 => {
                let hit = cache.get(&key).is_some();
                assert_eq!(hit, cache.contains(&key));
            },
            4 => {
                cache.remove(&key);
                assert!(!cache.contains(&key));
            },
            _ => {
                let before = cache.len();
                if cache.pop_victim().is_some() {
                    assert_eq!(cache.len(), before - 1);
                }
            },
        }

        assert!(cache.len() <= cache.capacity());
        assert!(cache.split() <= cache.capacity());
        if let Err(err) = cache.check_invariants() {
            panic!("{}", err);
        }
    }
});
