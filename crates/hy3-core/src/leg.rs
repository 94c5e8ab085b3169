//! Per-phase leg records.
//!
//! An entry carries up to four blocks of timing data: the seed, and the
//! prelim / swim-off / finals results. Each block becomes an optional
//! record on the output entry. A block whose fields are all absent is
//! omitted, so an entry never carries `"prelim": {}`.

use crate::model::{DqInfoRecord, EntryRecord, Leaf, Phase};
use crate::prune::{Record, RecordBuilder};

/// Build the record for one phase of `entry`, or `None` if the phase has
/// no data.
///
/// `Phase::Seed` yields the seed block (see [`build_seed`]); the timed
/// phases yield `{time, course, time_code, dq, heat, lane, heat_place,
/// overall_place, date, splits}`.
pub fn build_leg(entry: &EntryRecord, phase: Phase) -> Option<Record> {
    let Some(fields) = entry.phase(phase) else {
        return build_seed(entry);
    };

    let leg = RecordBuilder::new()
        .field("time", &fields.time)
        .field("course", &fields.course)
        .field("time_code", &fields.time_code);
    let leg = match fields.dq_info {
        Some(Leaf::Known(dq)) => leg.child("dq", build_dq(dq)),
        Some(Leaf::Other(raw)) => leg.field("dq", raw),
        None => leg,
    };

    leg.field("heat", &fields.heat)
        .field("lane", &fields.lane)
        .field("heat_place", &fields.heat_place)
        .field("overall_place", &fields.overall_place)
        .field("date", &fields.date)
        .field("splits", &fields.splits)
        .build_optional()
}

/// Build the seed block: the declared time and its converted counterpart.
pub fn build_seed(entry: &EntryRecord) -> Option<Record> {
    RecordBuilder::new()
        .field("time", &entry.seed_time)
        .field("course", &entry.seed_course)
        .field("converted_time", &entry.converted_seed_time)
        .field("converted_course", &entry.converted_seed_time_course)
        .build_optional()
}

/// Build the disqualification detail of a leg.
pub fn build_dq(dq: &DqInfoRecord) -> Option<Record> {
    RecordBuilder::new()
        .field("code", &dq.code)
        .field("info", &dq.info_str)
        .build_optional()
}
