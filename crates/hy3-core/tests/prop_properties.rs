/// Property-based tests for pruning and event ordering.
///
/// Uses `proptest` to generate:
/// - random flat records mixing nulls, empty/non-empty objects, arrays and
///   scalars, to check pruning idempotence and that nothing present is lost;
/// - random multisets of event identifiers (numeric, zero-padded, signed,
///   wider than `i64` and symbolic), to check the ordering is total and
///   input-order independent.
use std::cmp::Ordering;

use hy3_core::{compare_event_ids, prune, sorted_events, EventKey, Keyed, Record};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

// ============================================================================
// Strategies
// ============================================================================

fn arb_key() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z_]{1,10}").unwrap()
}

fn arb_field_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!({})),
        Just(json!([])),
        Just(json!({"nested": null})),
        any::<bool>().prop_map(Value::Bool),
        (-1000i64..1000).prop_map(|n| json!(n)),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
        prop::collection::vec(0i64..50, 1..4).prop_map(|v| json!(v)),
    ]
}

fn arb_record() -> impl Strategy<Value = Record> {
    prop::collection::vec((arb_key(), arb_field_value()), 0..12)
        .prop_map(|fields| fields.into_iter().collect::<Map<String, Value>>())
}

fn arb_event_id() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..500).prop_map(|n| n.to_string()),
        (0u32..50).prop_map(|n| format!("0{}", n)),
        (0u32..50).prop_map(|n| format!("-{}", n)),
        prop::string::string_regex("[1-9][0-9]{19,24}").unwrap(),
        prop::string::string_regex("[A-Za-z]{1,3}[0-9]?").unwrap(),
    ]
}

// ============================================================================
// Pruning
// ============================================================================

proptest! {
    #[test]
    fn prune_is_idempotent(record in arb_record()) {
        let once = prune(&record);
        let twice = prune(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prune_removes_only_absent_fields(record in arb_record()) {
        let pruned = prune(&record);
        for (key, value) in &record {
            let absent = value.is_null() || value.as_object().is_some_and(Map::is_empty);
            prop_assert_eq!(pruned.contains_key(key), !absent, "field {}", key);
        }
        for (key, value) in &pruned {
            prop_assert_eq!(Some(value), record.get(key));
        }
    }
}

// ============================================================================
// Event ordering
// ============================================================================

proptest! {
    #[test]
    fn event_order_is_total_and_antisymmetric(a in arb_event_id(), b in arb_event_id()) {
        let ab = compare_event_ids(&a, &b);
        let ba = compare_event_ids(&b, &a);
        prop_assert_eq!(ab, ba.reverse());
        prop_assert_eq!(ab == Ordering::Equal, a == b);
    }

    #[test]
    fn event_order_ignores_input_order(ids in prop::collection::vec(arb_event_id(), 0..20)) {
        let forward: Keyed<()> = ids.iter().map(|id| (id.clone(), ())).collect();
        let backward: Keyed<()> = ids.iter().rev().map(|id| (id.clone(), ())).collect();

        let order = |events: &Keyed<()>| -> Vec<String> {
            sorted_events(events).into_iter().map(|(k, _)| k.to_string()).collect()
        };
        prop_assert_eq!(order(&forward), order(&backward));
    }

    #[test]
    fn numeric_ids_precede_symbolic_ids(ids in prop::collection::vec(arb_event_id(), 0..20)) {
        let mut sorted = ids.clone();
        sorted.sort_by(|a, b| compare_event_ids(a, b));
        let first_symbolic = sorted.iter().position(|id| !EventKey::of(id).is_numeric());
        if let Some(pos) = first_symbolic {
            prop_assert!(sorted[pos..].iter().all(|id| !EventKey::of(id).is_numeric()));
        }
    }
}
