#![cfg(feature = "shape")]
//! Property-based tests for pick, omit and zip.
//!
//! - **Complement**: `pick(m, k)` and `omit(m, k)` are disjoint and their
//!   union is `m`
//! - **Idempotence**: picking the same keys twice changes nothing
//! - **Zip length**: the result is as long as the longest input

use fnutils::shape::{omit, pick, zip, zip2};
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};

fn small_map() -> impl Strategy<Value = BTreeMap<u8, i32>> {
    proptest::collection::btree_map(0_u8..32, any::<i32>(), 0..16)
}

fn key_list() -> impl Strategy<Value = Vec<u8>> {
    proptest::collection::vec(0_u8..40, 0..12)
}

proptest! {
    #[test]
    fn prop_pick_and_omit_partition_the_map(map in small_map(), keys in key_list()) {
        let picked = pick(&map, &keys);
        let omitted = omit(&map, &keys);

        prop_assert!(picked.keys().all(|key| !omitted.contains_key(key)));
        prop_assert_eq!(picked.len() + omitted.len(), map.len());

        let rebuilt: BTreeMap<u8, i32> = picked.into_iter().chain(omitted).collect();
        prop_assert_eq!(rebuilt, map);
    }

    #[test]
    fn prop_pick_only_keeps_requested_keys(map in small_map(), keys in key_list()) {
        let picked = pick(&map, &keys);

        prop_assert!(picked.keys().all(|key| keys.contains(key)));
        prop_assert!(picked.iter().all(|(key, value)| map.get(key) == Some(value)));
    }

    #[test]
    fn prop_pick_is_idempotent(map in small_map(), keys in key_list()) {
        let once = pick(&map, &keys);
        prop_assert_eq!(pick(&once, &keys), once.clone());
    }

    #[test]
    fn prop_zip_length_is_the_longest_input(
        sequences in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..10), 0..6)
    ) {
        let rows = zip(&sequences);
        let longest = sequences.iter().map(Vec::len).max().unwrap_or(0);

        prop_assert_eq!(rows.len(), longest);
        for (index, row) in rows.iter().enumerate() {
            prop_assert_eq!(row.len(), sequences.len());
            for (sequence, cell) in sequences.iter().zip(row) {
                prop_assert_eq!(cell, &sequence.get(index).copied());
            }
        }
    }

    #[test]
    fn prop_zip2_unzips_back(
        left in proptest::collection::vec(any::<i32>(), 0..10),
        right in proptest::collection::vec(any::<bool>(), 0..10),
    ) {
        let rows = zip2(left.clone(), right.clone());
        let (lefts, rights): (Vec<_>, Vec<_>) = rows.into_iter().unzip();

        prop_assert_eq!(lefts.into_iter().flatten().collect::<Vec<_>>(), left);
        prop_assert_eq!(rights.into_iter().flatten().collect::<Vec<_>>(), right);
    }
}

#[test]
fn pick_and_omit_on_a_hash_map() {
    let map = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);

    assert_eq!(pick(&map, &["a", "c"]), HashMap::from([("a", 1), ("c", 3)]));
    assert_eq!(omit(&map, &["a", "c"]), HashMap::from([("b", 2)]));
}

#[test]
fn zip_pads_shorter_sequences() {
    assert_eq!(
        zip(&[vec![1, 2, 3], vec![4, 5]]),
        vec![vec![Some(1), Some(4)], vec![Some(2), Some(5)], vec![Some(3), None]]
    );
}

#[cfg(feature = "serde")]
mod json {
    use fnutils::shape::{omit, omit_value, pick, pick_value};
    use serde_json::{Map, Value, json};

    #[test]
    fn pick_and_omit_on_json_objects() {
        let user = json!({"id": 7, "name": "Ferris", "token": "secret"});

        assert_eq!(pick_value(&user, &["id", "name"]), json!({"id": 7, "name": "Ferris"}));
        assert_eq!(omit_value(&user, &["token"]), json!({"id": 7, "name": "Ferris"}));
    }

    #[test]
    fn non_objects_are_handled_without_failing() {
        assert_eq!(pick_value(&json!("text"), &["a"]), json!({}));
        assert_eq!(omit_value(&Value::Null, &["a"]), Value::Null);
    }

    #[test]
    fn json_map_is_a_mapping() {
        let Value::Object(object) = json!({"a": 1, "b": [1, 2]}) else {
            unreachable!();
        };

        let picked: Map<String, Value> = pick(&object, &["b"]);
        let omitted = omit(&object, &["b"]);

        assert_eq!(Value::Object(picked), json!({"b": [1, 2]}));
        assert_eq!(Value::Object(omitted), json!({"a": 1}));
    }
}
