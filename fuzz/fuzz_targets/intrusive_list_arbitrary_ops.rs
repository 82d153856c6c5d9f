#![no_main]

use adaptive_pipeline::ds::IntrusiveList;
use libfuzzer_sys::fuzz_target;

// Random push/pop/move/remove sequences; handles may go stale.
fuzz_target!(|data: &[u8]| {
    let mut list: IntrusiveList<u32> = IntrusiveList::new();
    let mut ids = Vec::new();

    for pair in data.chunks_exact(2) {
        let value = u32::from(pair[1]);
        match pair[0] % 5 {
            0 => {
                let id = list.push_front(value);
                ids.push(id);
                assert_eq!(list.iter().next(), Some(&value));
                assert_eq!(list.get(id), Some(&value));
            },
            1 => {
                let old_len = list.len();
                match list.pop_back() {
                    Some(_) => assert_eq!(list.len(), old_len - 1),
                    None => assert_eq!(old_len, 0),
                }
            },
            2 => {
                if !ids.is_empty() {
                    let id = ids[(value as usize) % ids.len()];
                    if list.move_to_front(id) {
                        assert_eq!(list.iter().next(), list.get(id));
                    }
                }
            },
            3 => {
                if !ids.is_empty() {
                    let id = ids.swap_remove((value as usize) % ids.len());
                    let old_len = list.len();
                    if list.remove(id).is_some() {
                        assert_eq!(list.len(), old_len - 1);
                    }
                }
            },
            _ => {
                list.clear();
                ids.clear();
                assert!(list.is_empty());
            },
        }

        list.debug_validate_invariants();
        assert_eq!(list.iter().count(), list.len());
    }
});
