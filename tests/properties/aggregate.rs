//! Property tests for aggregation.

use std::collections::HashSet;

use proptest::prelude::*;

use purposeviz::{aggregate, RawPurposeRecord, Transfer};

fn category() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-c]\\.[a-c]").unwrap()
}

fn transfer() -> impl Strategy<Value = Transfer> {
    ("R[1-3]", "http://p[1-2]").prop_map(|(r, p)| Transfer::new(r, p))
}

fn child() -> impl Strategy<Value = RawPurposeRecord> {
    (
        "[a-z]{1,6}",
        proptest::collection::vec(category(), 0..3),
    )
        .prop_map(|(name, data)| RawPurposeRecord::new(format!("x.P#{}()", name), data))
}

fn record() -> impl Strategy<Value = RawPurposeRecord> {
    (
        "[A-Z][a-z]{0,6}",
        proptest::collection::vec(category(), 0..4),
        proptest::collection::vec(transfer(), 0..4),
        proptest::collection::vec(child(), 0..4),
    )
        .prop_map(|(name, data, transfers, children)| {
            let mut raw = RawPurposeRecord::new(format!("x.{}", name), data);
            raw.transfers = transfers;
            raw.purposes = children;
            raw
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Ids are 1..=n with top-level purposes first, then children parent by parent.
    #[test]
    fn property_ids_are_dense_and_parent_major(
        records in proptest::collection::vec(record(), 0..6)
    ) {
        let model = aggregate(records).unwrap();

        let top: Vec<u32> = model.top_purposes.iter().map(|p| p.id.get()).collect();
        let nested: Vec<u32> = model
            .top_purposes
            .iter()
            .flat_map(|p| p.purposes.iter().map(|c| c.id.get()))
            .collect();
        let flat: Vec<u32> = model.child_purposes.iter().map(|p| p.id.get()).collect();

        let all: Vec<u32> = top.iter().chain(nested.iter()).copied().collect();
        let expected: Vec<u32> = (1..=all.len() as u32).collect();
        prop_assert_eq!(all, expected);
        prop_assert_eq!(nested, flat);
    }

    /// PROPERTY: Exactly the purposes with data are kept, each once.
    #[test]
    fn property_kept_purposes_are_exactly_those_with_data(
        records in proptest::collection::vec(record(), 0..6)
    ) {
        let parents: Vec<&RawPurposeRecord> = records.iter().filter(|r| r.has_data()).collect();
        let expected_top = parents.len();
        let expected_children: usize = parents
            .iter()
            .map(|p| p.purposes.iter().filter(|c| c.has_data()).count())
            .sum();
        let expected_names: Vec<String> = parents
            .iter()
            .filter_map(|p| p.name.clone())
            .collect();

        let model = aggregate(records.clone()).unwrap();

        prop_assert_eq!(model.top_purposes.len(), expected_top);
        prop_assert_eq!(model.child_purposes.len(), expected_children);
        let kept_names: Vec<String> = model.top_purposes.iter().map(|p| p.name.clone()).collect();
        prop_assert_eq!(kept_names, expected_names);
        prop_assert!(model.top_purposes.iter().all(|p| !p.data.is_empty()));
        prop_assert!(model.child_purposes.iter().all(|p| !p.data.is_empty()));
    }

    /// PROPERTY: Data categories are sorted and unique.
    #[test]
    fn property_data_categories_sorted_unique(
        records in proptest::collection::vec(record(), 0..6)
    ) {
        let model = aggregate(records).unwrap();

        let ids: Vec<&str> = model.data_categories.iter().map(|c| c.as_str()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        sorted.dedup();
        prop_assert_eq!(ids, sorted);
    }

    /// PROPERTY: Transfers are unique per (recipient, policy) and ordered by recipient.
    #[test]
    fn property_transfers_unique_and_ordered(
        records in proptest::collection::vec(record(), 0..6)
    ) {
        let model = aggregate(records).unwrap();

        let keys: HashSet<(&str, &str)> = model
            .transfers
            .iter()
            .map(|t| (t.recipient_id.as_str(), t.policy_url.as_str()))
            .collect();
        prop_assert_eq!(keys.len(), model.transfers.len());
        prop_assert!(model
            .transfers
            .windows(2)
            .all(|w| w[0].recipient_id <= w[1].recipient_id));
    }

    /// PROPERTY: Aggregating the same records twice yields the same model.
    #[test]
    fn property_aggregate_is_deterministic(
        records in proptest::collection::vec(record(), 0..6)
    ) {
        let first = aggregate(records.clone()).unwrap();
        let second = aggregate(records).unwrap();
        prop_assert_eq!(first, second);
    }
}
