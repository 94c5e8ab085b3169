//! Tests for flattening teams, swimmers, events and entries.

use hy3_core::flatten::{flatten_entry, flatten_events, flatten_swimmers, flatten_teams, swimmer_refs};
use hy3_core::{EntryRecord, EventRecord, Keyed, Leaf, MeetId, SwimmerRecord, TeamRecord};
use serde_json::{json, Value};

fn values(records: Vec<hy3_core::Record>) -> Value {
    Value::Array(records.into_iter().map(Value::Object).collect())
}

fn swimmer_with_id(id: MeetId) -> SwimmerRecord {
    SwimmerRecord {
        meet_id: Some(Leaf::Known(id)),
        ..Default::default()
    }
}

// ============================================================================
// Teams
// ============================================================================

#[test]
fn teams_carry_code_and_drop_swimmer_map() {
    let mut roster = Keyed::new();
    roster.insert("7", swimmer_with_id(MeetId::Integer(7)));
    let teams: Keyed<TeamRecord> = [(
        "ABC",
        TeamRecord {
            name: Some("Acme Club".into()),
            swimmers: roster,
            ..Default::default()
        },
    )]
    .into_iter()
    .collect();

    assert_eq!(
        values(flatten_teams(&teams)),
        json!([{"code": "ABC", "name": "Acme Club"}])
    );
}

#[test]
fn team_key_wins_over_embedded_code() {
    let teams: Keyed<TeamRecord> = [(
        "ABC",
        TeamRecord {
            code: Some("XYZ".into()),
            ..Default::default()
        },
    )]
    .into_iter()
    .collect();
    assert_eq!(values(flatten_teams(&teams)), json!([{"code": "ABC"}]));
}

#[test]
fn teams_keep_insertion_order() {
    let teams: Keyed<TeamRecord> = ["ZZZ", "AAA", "MMM"]
        .into_iter()
        .map(|code| (code, TeamRecord::default()))
        .collect();
    assert_eq!(
        values(flatten_teams(&teams)),
        json!([{"code": "ZZZ"}, {"code": "AAA"}, {"code": "MMM"}])
    );
}

#[test]
fn unmodelled_team_fields_pass_through() {
    let team: TeamRecord = serde_json::from_value(json!({
        "name": "Acme Club",
        "website": "https://acme.example",
        "coaches": ["Pat"]
    }))
    .unwrap();
    let teams: Keyed<TeamRecord> = [("ABC", team)].into_iter().collect();
    assert_eq!(
        values(flatten_teams(&teams)),
        json!([{
            "code": "ABC",
            "name": "Acme Club",
            "website": "https://acme.example",
            "coaches": ["Pat"]
        }])
    );
}

// ============================================================================
// Swimmers
// ============================================================================

#[test]
fn numeric_swimmer_key_becomes_integer() {
    let swimmers: Keyed<SwimmerRecord> = [(
        "42",
        SwimmerRecord {
            first_name: Some("Jo".into()),
            ..Default::default()
        },
    )]
    .into_iter()
    .collect();
    assert_eq!(
        values(flatten_swimmers(&swimmers)),
        json!([{"meet_id": 42, "first_name": "Jo"}])
    );
}

#[test]
fn symbolic_swimmer_key_stays_string() {
    let swimmers: Keyed<SwimmerRecord> = [("A7", SwimmerRecord::default())].into_iter().collect();
    assert_eq!(values(flatten_swimmers(&swimmers)), json!([{"meet_id": "A7"}]));
}

#[test]
fn swimmer_key_wins_over_embedded_meet_id() {
    let swimmers: Keyed<SwimmerRecord> = [("42", swimmer_with_id(MeetId::Integer(99)))]
        .into_iter()
        .collect();
    assert_eq!(values(flatten_swimmers(&swimmers)), json!([{"meet_id": 42}]));
}

#[test]
fn swimmer_leaves_are_normalized() {
    let swimmer: SwimmerRecord = serde_json::from_value(json!({
        "last_name": "Smith",
        "gender": "F",
        "date_of_birth": "2010-04-02",
        "age": 13
    }))
    .unwrap();
    let swimmers: Keyed<SwimmerRecord> = [("3", swimmer)].into_iter().collect();
    assert_eq!(
        values(flatten_swimmers(&swimmers)),
        json!([{
            "meet_id": 3,
            "last_name": "Smith",
            "gender": "FEMALE",
            "date_of_birth": "2010-04-02",
            "age": 13
        }])
    );
}

#[test]
fn meet_id_key_resolution() {
    assert_eq!(MeetId::from_key("42"), MeetId::Integer(42));
    assert_eq!(MeetId::from_key("007"), MeetId::Integer(7));
    assert_eq!(MeetId::from_key("A7"), MeetId::Raw("A7".to_string()));
    assert_eq!(MeetId::from_key("-1"), MeetId::Raw("-1".to_string()));
    assert_eq!(MeetId::from_key(""), MeetId::Raw(String::new()));
    assert_eq!(
        MeetId::from_key("99999999999999999999"),
        MeetId::Raw("99999999999999999999".to_string())
    );
}

// ============================================================================
// Entries
// ============================================================================

#[test]
fn entry_swimmers_reduce_to_ids_in_order() {
    let entry = EntryRecord {
        swimmers: vec![
            swimmer_with_id(MeetId::Integer(5)),
            swimmer_with_id(MeetId::Integer(12)),
        ],
        ..Default::default()
    };
    assert_eq!(swimmer_refs(&entry), vec![json!(5), json!(12)]);
}

#[test]
fn relay_entry_keeps_multiplicity_and_symbolic_ids() {
    let entry = EntryRecord {
        relay: Leaf::Known(true),
        swimmers: vec![
            swimmer_with_id(MeetId::Integer(3)),
            swimmer_with_id(MeetId::Raw("B2".to_string())),
            swimmer_with_id(MeetId::Integer(3)),
            SwimmerRecord::default(),
        ],
        ..Default::default()
    };
    assert_eq!(
        Value::Object(flatten_entry(&entry)),
        json!({"swimmers": [3, "B2", 3, null], "relay": true})
    );
}

#[test]
fn entry_without_timing_has_no_leg_keys() {
    let entry = EntryRecord::default();
    assert_eq!(
        Value::Object(flatten_entry(&entry)),
        json!({"swimmers": [], "relay": false})
    );
}

#[test]
fn entry_legs_in_fixed_order() {
    let entry: EntryRecord = serde_json::from_value(json!({
        "finals_time": 24.9,
        "event_number": "4",
        "swimoff_time": 25.1,
        "seed_time": 25.5,
        "prelim_time": 25.2
    }))
    .unwrap();
    let record = flatten_entry(&entry);
    let keys: Vec<&str> = record.keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        ["swimmers", "relay", "event_number", "seed", "prelim", "swimoff", "finals"]
    );
}

// ============================================================================
// Events
// ============================================================================

#[test]
fn events_are_numbered_and_sorted() {
    let events: Keyed<EventRecord> = ["10", "TT", "2", "1"]
        .into_iter()
        .map(|n| (n, EventRecord::default()))
        .collect();
    let numbers: Vec<Value> = flatten_events(&events)
        .into_iter()
        .map(|e| e["number"].clone())
        .collect();
    assert_eq!(numbers, [json!("1"), json!("2"), json!("10"), json!("TT")]);
}

#[test]
fn event_fields_are_renamed_and_defaulted() {
    let event: EventRecord = serde_json::from_value(json!({
        "distance": 100,
        "stroke": "BUTTERFLY",
        "course": "Y",
        "date_": "2024-03-09",
        "fee": 5.5,
        "gender": "M",
        "gender_age": "B",
        "age_min": 11,
        "age_max": 12,
        "open_": false,
        "relay_team_id": null
    }))
    .unwrap();
    let events: Keyed<EventRecord> = [("5", event)].into_iter().collect();
    assert_eq!(
        values(flatten_events(&events)),
        json!([{
            "number": "5",
            "distance": 100,
            "stroke": "BUTTERFLY",
            "course": "SCY",
            "date": "2024-03-09",
            "fee": 5.5,
            "gender": "MALE",
            "gender_age": "BOYS",
            "age_min": 11,
            "age_max": 12,
            "open": false,
            "relay": false,
            "entries": []
        }])
    );
}

#[test]
fn event_entries_keep_source_order() {
    let event = EventRecord {
        entries: [9, 1, 5]
            .into_iter()
            .map(|id| EntryRecord {
                swimmers: vec![swimmer_with_id(MeetId::Integer(id))],
                ..Default::default()
            })
            .collect(),
        ..Default::default()
    };
    let events: Keyed<EventRecord> = [("1", event)].into_iter().collect();
    let flattened = flatten_events(&events);
    let entries = flattened[0]["entries"].as_array().unwrap();
    let ids: Vec<&Value> = entries.iter().map(|e| &e["swimmers"][0]).collect();
    assert_eq!(ids, [&json!(9), &json!(1), &json!(5)]);
}

#[test]
fn unrecognized_event_leaves_pass_through() {
    let event: EventRecord = serde_json::from_value(json!({
        "distance": "50",
        "stroke": "Z",
        "relay": "Y",
        "entries": [{"event_number": 1, "swimmers": [{"meet_id": 4.5}]}]
    }))
    .unwrap();
    let events: Keyed<EventRecord> = [("1", event)].into_iter().collect();
    assert_eq!(
        values(flatten_events(&events)),
        json!([{
            "number": "1",
            "distance": "50",
            "stroke": "Z",
            "relay": "Y",
            "entries": [{"swimmers": [4.5], "relay": false, "event_number": 1}]
        }])
    );
}

// ============================================================================
// Keyed maps
// ============================================================================

#[test]
fn large_keyed_map_keeps_order_and_lookups() {
    let mut swimmers: Keyed<u32> = (0..20_000u32).map(|n| (n.to_string(), n)).collect();
    swimmers.insert("5", 99);

    assert_eq!(swimmers.len(), 20_000);
    assert_eq!(swimmers.get("5"), Some(&99));
    assert_eq!(swimmers.get("19999"), Some(&19_999));
    assert_eq!(swimmers.get("20000"), None);
    let head: Vec<(&str, &u32)> = swimmers.iter().take(6).collect();
    assert_eq!(
        head,
        [("0", &0), ("1", &1), ("2", &2), ("3", &3), ("4", &4), ("5", &99)]
    );
}
