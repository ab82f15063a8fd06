//! Property tests for order-preserving deduplication.

use std::collections::HashSet;

use proptest::prelude::*;

use purposeviz::domain::services::dedup_by_key;

proptest! {
    /// PROPERTY: Running dedup on its own output changes nothing.
    #[test]
    fn property_dedup_is_idempotent(items in proptest::collection::vec(0u8..8, 0..32)) {
        let once = dedup_by_key(items, |x| *x);
        let twice = dedup_by_key(once.clone(), |x| *x);
        prop_assert_eq!(once, twice);
    }

    /// PROPERTY: Output keeps first occurrences in input order and covers every key.
    #[test]
    fn property_dedup_keeps_first_occurrences(items in proptest::collection::vec(0u8..8, 0..32)) {
        let unique = dedup_by_key(items.clone(), |x| *x);

        let mut seen = HashSet::new();
        let expected: Vec<u8> = items.iter().copied().filter(|x| seen.insert(*x)).collect();
        prop_assert_eq!(unique, expected);
    }
}
