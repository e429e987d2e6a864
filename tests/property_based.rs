//! Property-based tests for escaping, ordering, and enumeration invariants

use hostprobe::features::{enumerate, sort_flags, FeatureSet, MAX_FEATURES};
use hostprobe::render::{JsonPrinter, Printer};
use proptest::prelude::*;

fn escape_to_json(value: &str) -> String {
    let mut buf = Vec::new();
    JsonPrinter::new(&mut buf).emit_str(value).unwrap();
    String::from_utf8(buf).unwrap()
}

proptest! {
    /// Any string survives a JSON escape/parse round trip unchanged
    #[test]
    fn prop_json_escape_round_trips(value in "\\PC*") {
        let escaped = escape_to_json(&value);
        let parsed: String = serde_json::from_str(&escaped).unwrap();
        prop_assert_eq!(parsed, value);
    }

    /// Strings full of quotes, backslashes, and controls also round trip
    #[test]
    fn prop_json_escape_round_trips_hostile(value in "[\"\\\\/\u{0}-\u{1f}a-z]{0,64}") {
        let escaped = escape_to_json(&value);
        let parsed: String = serde_json::from_str(&escaped).unwrap();
        prop_assert_eq!(parsed, value);
    }

    /// sort_flags is idempotent and produces a totally ordered, unique list
    #[test]
    fn prop_sort_flags_idempotent(flags in proptest::collection::vec("[a-z0-9_]{1,12}", 0..32)) {
        let mut once = flags.clone();
        sort_flags(&mut once);
        let mut twice = once.clone();
        sort_flags(&mut twice);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.windows(2).all(|w| w[0] < w[1]));
    }

    /// enumerate reports exactly the set bits within the name table
    #[test]
    fn prop_enumerate_matches_membership(indices in proptest::collection::btree_set(0..MAX_FEATURES, 0..40)) {
        const NAMES: &[&str] = &[
            "f00", "f01", "f02", "f03", "f04", "f05", "f06", "f07",
            "f08", "f09", "f10", "f11", "f12", "f13", "f14", "f15",
        ];

        let mut set = FeatureSet::empty();
        for index in &indices {
            set.set(*index);
        }

        let found = enumerate(&set, NAMES);
        prop_assert!(found.len() <= NAMES.len());
        for (index, name) in NAMES.iter().enumerate() {
            prop_assert_eq!(found.contains(name), indices.contains(&index));
        }
        // No duplicates.
        let mut unique = found.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(unique.len(), found.len());
    }
}
