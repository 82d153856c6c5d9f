// ==============================================
// ADAPTIVE CACHE SCENARIOS (integration)
// ==============================================
//
// End-to-end behavior through the public API only: construction, the
// replacement rule, ghost-driven adaptation and clearing.

use adaptive_pipeline::create_cache;
use adaptive_pipeline::policy::adaptive::{AdaptiveCache, Residency};
use adaptive_pipeline::traits::{AdaptiveCacheTrait, CoreCache, MutableCache, ReadOnlyCache};

mod construction {
    use super::*;

    #[test]
    fn capacity_100_starts_empty() {
        let cache: AdaptiveCache<String, i32> = AdaptiveCache::new(100).unwrap();
        assert_eq!(cache.capacity(), 100);
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.split(), 0);
    }

    #[test]
    fn zero_capacity_fails() {
        let err = create_cache::<String, i32>(0).unwrap_err();
        assert!(err.to_string().starts_with("invalid argument"));
    }
}

mod replacement {
    use super::*;

    #[test]
    fn single_use_keys_evict_in_insertion_order() {
        let mut cache = create_cache(2).unwrap();
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);

        assert_eq!(cache.get(&"a"), None);
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[test]
    fn reused_key_outlives_single_use_key() {
        let mut cache = create_cache(2).unwrap();
        cache.put("a", 1);
        cache.get(&"a");
        cache.put("b", 2);
        cache.put("c", 3);

        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"b"), None);
    }

    #[test]
    fn update_returns_previous_value() {
        let mut cache = create_cache(4).unwrap();
        assert_eq!(cache.put("k", 1), None);
        assert_eq!(cache.put("k", 2), Some(1));
        assert_eq!(cache.get(&"k"), Some(&2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn scan_does_not_flush_hot_set() {
        let mut cache = create_cache(10).unwrap();
        for key in 0..5u32 {
            cache.put(key, key);
            cache.get(&key);
        }
        for key in 100..1000u32 {
            cache.put(key, key);
        }
        for key in 0..5u32 {
            assert_eq!(cache.get(&key), Some(&key), "hot key {} flushed by scan", key);
        }
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn remove_batch_reports_each_key() {
        let mut cache = create_cache(4).unwrap();
        cache.put(1, "one");
        cache.put(2, "two");
        assert_eq!(
            cache.remove_batch(&[2, 3, 1]),
            vec![Some("two"), None, Some("one")]
        );
        assert!(cache.is_empty());
    }
}

mod adaptation {
    use super::*;

    #[test]
    fn recency_ghost_rerequest_grows_split() {
        let mut cache = create_cache(2).unwrap();
        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);
        assert_eq!(cache.ghost_residency(&"a"), Some(Residency::Recency));

        cache.put("a", 1);
        assert_eq!(cache.split(), 1);
        assert!(cache.recency_ghost_len() <= cache.ghost_capacity());
    }

    #[test]
    fn frequency_ghost_rerequest_shrinks_split() {
        let mut cache = AdaptiveCache::<&str, ()>::builder(3).initial_split(3).build();
        for key in ["a", "b", "c"] {
            cache.put(key, ());
            cache.get(&key);
        }
        cache.put("d", ());
        assert_eq!(cache.ghost_residency(&"a"), Some(Residency::Frequency));

        cache.get(&"a");
        assert_eq!(cache.split(), 2);
    }

    #[test]
    fn split_stays_within_capacity_under_churn() {
        let mut cache = create_cache(4).unwrap();
        for round in 0..50u32 {
            for key in 0..8u32 {
                cache.put(key, round);
                if key % 3 == 0 {
                    cache.get(&key);
                }
            }
            assert!(cache.split() <= cache.capacity());
        }
        assert!(cache.check_invariants().is_ok());
    }

    #[test]
    fn pop_victim_feeds_ghost_but_remove_does_not() {
        let mut cache = create_cache(3).unwrap();
        cache.put(1, ());
        cache.put(2, ());
        assert_eq!(cache.pop_victim(), Some((1, ())));
        assert_eq!(cache.remove(&2), Some(()));
        assert_eq!(cache.ghost_residency(&1), Some(Residency::Recency));
        assert_eq!(cache.ghost_residency(&2), None);
    }
}

mod lifecycle {
    use super::*;

    #[test]
    fn clear_forgets_everything() {
        let mut cache = create_cache(3).unwrap();
        for key in 0..6 {
            cache.put(key, key * 10);
        }
        cache.get(&5);
        cache.clear();

        assert_eq!(cache.len(), 0);
        assert_eq!(cache.split(), 0);
        assert_eq!(cache.recency_ghost_len() + cache.frequency_ghost_len(), 0);
        for key in 0..6 {
            assert_eq!(cache.get(&key), None);
        }
    }

    #[test]
    fn repeated_get_does_not_reorder_after_promotion() {
        let mut cache = create_cache(3).unwrap();
        cache.put("x", 1);
        cache.put("y", 2);
        cache.put("z", 3);
        cache.get(&"y");
        let before: Vec<_> = cache.keys().copied().collect();
        cache.get(&"y");
        cache.get(&"y");
        let after: Vec<_> = cache.keys().copied().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn generic_code_sees_adaptive_surface() {
        fn drain<C: AdaptiveCacheTrait<u8, u8>>(cache: &mut C) -> Vec<u8> {
            std::iter::from_fn(|| cache.pop_victim().map(|(k, _)| k)).collect()
        }
        let mut cache = create_cache(4).unwrap();
        for key in 0..4u8 {
            cache.put(key, key);
        }
        cache.get(&0);
        assert_eq!(drain(&mut cache), vec![1, 2, 3, 0]);
    }

    #[test]
    fn display_reports_sizes() {
        let mut cache = create_cache(2).unwrap();
        cache.put(1u8, 1u8);
        let text = cache.to_string();
        assert!(text.contains("maxsize=2"));
        assert!(text.contains("currsize=1"));
    }
}
