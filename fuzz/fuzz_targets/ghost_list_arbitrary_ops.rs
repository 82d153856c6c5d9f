#![no_main]

use adaptive_pipeline::ds::GhostList;
use libfuzzer_sys::fuzz_target;

// Random record/remove/contains/clear sequences against a bounded ghost list.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let capacity = (data[0] as usize) % 51;
    let mut ghost: GhostList<u32> = GhostList::new(capacity);

    for pair in data[1..].chunks_exact(2) {
        let key = u32::from(pair[1]);
        match pair[0] % 4 {
            0 => {
                let was_full = ghost.len() == capacity;
                let was_present = ghost.contains(&key);
                let forgotten = ghost.record(key);
                if capacity == 0 {
                    assert!(!ghost.contains(&key));
                } else {
                    assert!(ghost.contains(&key));
                    if was_full && !was_present {
                        assert!(forgotten.is_some());
                    }
                }
            },
            1 => {
                let was_present = ghost.contains(&key);
                assert_eq!(ghost.remove(&key), was_present);
                assert!(!ghost.contains(&key));
            },
            2 => {
                assert_eq!(ghost.iter().count(), ghost.len());
            },
            _ => {
                ghost.clear();
                assert!(ghost.is_empty());
            },
        }

        ghost.debug_validate_invariants();
        assert!(ghost.len() <= ghost.capacity());
    }
});
