//! Relational flattening of the meet's keyed collections.
//!
//! The parsed tree keys teams, swimmers and events by identifier and embeds
//! full swimmer records wherever a swimmer is referenced. The output instead
//! carries plain lists, with each map key folded into the record as an
//! explicit field, and refers to swimmers by `meet_id` only.

use serde_json::Value;
use tracing::debug;

use crate::leg::build_leg;
use crate::model::{EntryRecord, EventRecord, Keyed, MeetId, Phase, SwimmerRecord, TeamRecord};
use crate::normalize::Normalize;
use crate::order::sorted_events;
use crate::prune::{Record, RecordBuilder};

/// Teams as a list, in input order, each with its `code`.
///
/// The team's embedded swimmer map is dropped: the meet-level swimmer list
/// already holds those swimmers.
pub fn flatten_teams(teams: &Keyed<TeamRecord>) -> Vec<Record> {
    teams
        .iter()
        .map(|(code, team)| flatten_team(code, team))
        .collect()
}

fn flatten_team(code: &str, team: &TeamRecord) -> Record {
    RecordBuilder::new()
        .field("code", code)
        .field("name", &team.name)
        .field("short_name", &team.short_name)
        .field("lsc", &team.lsc)
        .field("address_1", &team.address_1)
        .field("address_2", &team.address_2)
        .field("city", &team.city)
        .field("state", &team.state)
        .field("postal_code", &team.postal_code)
        .field("country", &team.country)
        .field("region", &team.region)
        .passthrough(&team.extra)
        .build()
}

/// Swimmers as a list, in input order, each with its `meet_id`.
///
/// The `meet_id` comes from the map key: an integer when the key is all
/// decimal digits, otherwise the key itself.
pub fn flatten_swimmers(swimmers: &Keyed<SwimmerRecord>) -> Vec<Record> {
    swimmers
        .iter()
        .map(|(key, swimmer)| flatten_swimmer(&MeetId::from_key(key), swimmer))
        .collect()
}

fn flatten_swimmer(meet_id: &MeetId, swimmer: &SwimmerRecord) -> Record {
    RecordBuilder::new()
        .field("meet_id", meet_id)
        .field("team_code", &swimmer.team_code)
        .field("last_name", &swimmer.last_name)
        .field("first_name", &swimmer.first_name)
        .field("nick_name", &swimmer.nick_name)
        .field("middle_initial", &swimmer.middle_initial)
        .field("gender", &swimmer.gender)
        .field("date_of_birth", &swimmer.date_of_birth)
        .field("age", &swimmer.age)
        .field("usa_swimming_id", &swimmer.usa_swimming_id)
        .field("citizen", &swimmer.citizen)
        .passthrough(&swimmer.extra)
        .build()
}

/// Events as a list in event-number order, each with its entries.
pub fn flatten_events(events: &Keyed<EventRecord>) -> Vec<Record> {
    sorted_events(events)
        .into_iter()
        .map(|(number, event)| flatten_event(number, event))
        .collect()
}

fn flatten_event(number: &str, event: &EventRecord) -> Record {
    let entries: Vec<Value> = event
        .entries
        .iter()
        .map(|entry| Value::Object(flatten_entry(entry)))
        .collect();
    debug!(event = number, entries = entries.len(), "flattened event");

    RecordBuilder::new()
        .field("number", number)
        .field("distance", &event.distance)
        .field("stroke", &event.stroke)
        .field("course", &event.course)
        .field("date", &event.date_)
        .field("fee", &event.fee)
        .field("gender", &event.gender)
        .field("gender_age", &event.gender_age)
        .field("age_min", &event.age_min)
        .field("age_max", &event.age_max)
        .field("open", &event.open_)
        .field("relay", &event.relay)
        .field("relay_team_id", &event.relay_team_id)
        .field("relay_swim_team_code", &event.relay_swim_team_code)
        .list("entries", entries)
        .build()
}

/// Reshape one entry: swimmer references reduced to ids, timing data
/// grouped into seed and per-phase legs.
///
/// An entry never collapses: `swimmers` and `relay` are always present.
pub fn flatten_entry(entry: &EntryRecord) -> Record {
    let mut record = RecordBuilder::new()
        .list("swimmers", swimmer_refs(entry))
        .field("relay", &entry.relay)
        .field("event_number", &entry.event_number);
    for phase in Phase::ALL {
        record = record.child(phase.prefix(), build_leg(entry, phase));
    }
    record.build()
}

/// The `meet_id` of every swimmer on the entry, in swim order.
///
/// A reference without a `meet_id` stays in the list as `null` so relay
/// positions are not shifted.
pub fn swimmer_refs(entry: &EntryRecord) -> Vec<Value> {
    entry
        .swimmers
        .iter()
        .map(|swimmer| swimmer.meet_id.normalize())
        .collect()
}
