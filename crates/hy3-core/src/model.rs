//! The parsed results tree, as delivered by the HY3 parser.
//!
//! Every optional field is an explicit `Option` with a serde default, so a
//! missing key and an explicit `null` read the same way. Keyed collections
//! are [`Keyed`] maps that remember insertion order.
//!
//! Leaves are read leniently: each one is a [`Leaf`], which holds the typed
//! value when the parser's output matches the model and the raw JSON value
//! otherwise. Only the nesting itself (the meet, its keyed maps, the entry
//! lists) is required to have the expected shape.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;

use chrono::{NaiveDate, NaiveDateTime};
use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{ReshapeError, Result};
use crate::types::{Course, Gender, GenderAge, MeetType, Stroke, TimeCode};

// ============================================================================
// Keyed maps
// ============================================================================

/// A string-keyed map that iterates in insertion order.
///
/// Re-inserting an existing key replaces its value in place, so the key keeps
/// its original position.
#[derive(Clone)]
pub struct Keyed<T> {
    entries: Vec<(String, T)>,
    index: HashMap<String, usize>,
}

impl<T> Keyed<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: T) {
        let key = key.into();
        match self.index.get(&key) {
            Some(&slot) => self.entries[slot].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.entries.iter_mut().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Keyed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for Keyed<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<T: fmt::Debug> fmt::Debug for Keyed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for Keyed<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        let mut keyed = Keyed::new();
        for (key, value) in iter {
            keyed.insert(key, value);
        }
        keyed
    }
}

impl<T: Serialize> Serialize for Keyed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct KeyedVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for KeyedVisitor<T> {
    type Value = Keyed<T>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object keyed by identifier")
    }

    // A `null` collection is read as empty.
    fn visit_unit<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(Keyed::new())
    }

    fn visit_none<E: de::Error>(self) -> std::result::Result<Self::Value, E> {
        Ok(Keyed::new())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> std::result::Result<Self::Value, A::Error> {
        let mut keyed = Keyed::new();
        while let Some((key, value)) = access.next_entry::<String, T>()? {
            keyed.insert(key, value);
        }
        Ok(keyed)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Keyed<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(KeyedVisitor(PhantomData))
    }
}

// ============================================================================
// Leaf types
// ============================================================================

/// A leaf of the parsed tree: the modelled value, or whatever the parser
/// emitted when it does not fit the model.
///
/// `Other` keeps the converter usable when the parser grows a new code or
/// changes a leaf's type; such values reach the output unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Leaf<T> {
    Known(T),
    Other(Value),
}

impl<T> Leaf<T> {
    /// The modelled value, if the leaf had one.
    pub fn known(&self) -> Option<&T> {
        match self {
            Leaf::Known(value) => Some(value),
            Leaf::Other(_) => None,
        }
    }
}

impl<T: Default> Default for Leaf<T> {
    fn default() -> Self {
        Leaf::Known(T::default())
    }
}

impl<T> From<T> for Leaf<T> {
    fn from(value: T) -> Self {
        Leaf::Known(value)
    }
}

impl From<&str> for Leaf<String> {
    fn from(value: &str) -> Self {
        Leaf::Known(value.to_string())
    }
}

/// Meet-local swimmer identifier.
///
/// HY3 files mostly use decimal ids, but some producers emit symbolic ones.
/// The form is resolved once, when the id is read.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MeetId {
    Integer(i64),
    Raw(String),
}

impl MeetId {
    /// Resolve a map key: all-ASCII-digit keys that fit an `i64` become
    /// integers, anything else is kept verbatim.
    pub fn from_key(key: &str) -> Self {
        if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(n) = key.parse::<i64>() {
                return MeetId::Integer(n);
            }
        }
        MeetId::Raw(key.to_string())
    }
}

impl fmt::Display for MeetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeetId::Integer(n) => write!(f, "{}", n),
            MeetId::Raw(s) => f.write_str(s),
        }
    }
}

impl From<i64> for MeetId {
    fn from(n: i64) -> Self {
        MeetId::Integer(n)
    }
}

impl From<&str> for MeetId {
    fn from(key: &str) -> Self {
        MeetId::from_key(key)
    }
}

impl Serialize for MeetId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            MeetId::Integer(n) => serializer.serialize_i64(*n),
            MeetId::Raw(s) => serializer.serialize_str(s),
        }
    }
}

struct MeetIdVisitor;

impl<'de> Visitor<'de> for MeetIdVisitor {
    type Value = MeetId;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer or string swimmer id")
    }

    fn visit_i64<E: de::Error>(self, n: i64) -> std::result::Result<MeetId, E> {
        Ok(MeetId::Integer(n))
    }

    fn visit_u64<E: de::Error>(self, n: u64) -> std::result::Result<MeetId, E> {
        Ok(i64::try_from(n)
            .map(MeetId::Integer)
            .unwrap_or_else(|_| MeetId::Raw(n.to_string())))
    }

    fn visit_str<E: de::Error>(self, s: &str) -> std::result::Result<MeetId, E> {
        Ok(MeetId::from_key(s))
    }
}

impl<'de> Deserialize<'de> for MeetId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(MeetIdVisitor)
    }
}

/// A recorded swim time: seconds, or the textual form the parser kept
/// (`"25.31"`, `"NS"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SwimTime {
    Seconds(f64),
    Text(String),
}

/// A date or a date-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Temporal {
    DateTime(NaiveDateTime),
    Date(NaiveDate),
}

/// Split number → cumulative time.
pub type Splits = Keyed<Leaf<SwimTime>>;

// ============================================================================
// Records
// ============================================================================
//
// Absent fields stay absent when a record is serialized back out, and
// fields the model does not name are carried in `extra`.

/// Root of the parsed tree: file header plus the meet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_description: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_created: Option<Leaf<Temporal>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub licensee: Option<Leaf<String>>,
    pub meet: MeetRecord,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeetRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facility: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Leaf<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<Leaf<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub altitude: Option<Leaf<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub masters: Option<Leaf<bool>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_: Option<Leaf<MeetType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<Leaf<Course>>,
    #[serde(default)]
    pub teams: Keyed<TeamRecord>,
    #[serde(default)]
    pub swimmers: Keyed<SwimmerRecord>,
    #[serde(default)]
    pub events: Keyed<EventRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A club or team. `swimmers` repeats part of the meet-level swimmer map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_name: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lsc: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_1: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_2: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Leaf<String>>,
    #[serde(default)]
    pub swimmers: Keyed<SwimmerRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SwimmerRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meet_id: Option<Leaf<MeetId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_code: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_initial: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Leaf<Gender>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<Leaf<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<Leaf<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usa_swimming_id: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citizen: Option<Leaf<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<Leaf<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Leaf<Stroke>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<Leaf<Course>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_: Option<Leaf<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Leaf<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Leaf<Gender>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender_age: Option<Leaf<GenderAge>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_min: Option<Leaf<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age_max: Option<Leaf<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_: Option<Leaf<bool>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub relay: Leaf<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relay_team_id: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relay_swim_team_code: Option<Leaf<String>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub entries: Vec<EntryRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One swimmer's (or relay team's) participation in one event.
///
/// Timing fields are flat, one group per phase, exactly as the parser emits
/// them. [`crate::leg`] reads them through [`EntryRecord::phase`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub swimmers: Vec<SwimmerRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub relay: Leaf<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_number: Option<Leaf<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_time: Option<Leaf<SwimTime>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_course: Option<Leaf<Course>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converted_seed_time: Option<Leaf<SwimTime>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub converted_seed_time_course: Option<Leaf<Course>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prelim_time: Option<Leaf<SwimTime>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prelim_course: Option<Leaf<Course>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prelim_time_code: Option<Leaf<TimeCode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prelim_dq_info: Option<Leaf<DqInfoRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prelim_heat: Option<Leaf<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prelim_lane: Option<Leaf<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prelim_heat_place: Option<Leaf<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prelim_overall_place: Option<Leaf<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prelim_date: Option<Leaf<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prelim_splits: Option<Leaf<Splits>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swimoff_time: Option<Leaf<SwimTime>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swimoff_course: Option<Leaf<Course>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swimoff_time_code: Option<Leaf<TimeCode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swimoff_dq_info: Option<Leaf<DqInfoRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swimoff_heat: Option<Leaf<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swimoff_lane: Option<Leaf<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swimoff_heat_place: Option<Leaf<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swimoff_overall_place: Option<Leaf<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swimoff_date: Option<Leaf<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swimoff_splits: Option<Leaf<Splits>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finals_time: Option<Leaf<SwimTime>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finals_course: Option<Leaf<Course>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finals_time_code: Option<Leaf<TimeCode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finals_dq_info: Option<Leaf<DqInfoRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finals_heat: Option<Leaf<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finals_lane: Option<Leaf<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finals_heat_place: Option<Leaf<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finals_overall_place: Option<Leaf<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finals_date: Option<Leaf<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finals_splits: Option<Leaf<Splits>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DqInfoRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Leaf<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_str: Option<Leaf<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Borrowed view of one timed phase's fields on an entry.
#[derive(Debug, Clone, Copy)]
pub struct PhaseFields<'a> {
    pub time: Option<&'a Leaf<SwimTime>>,
    pub course: Option<&'a Leaf<Course>>,
    pub time_code: Option<&'a Leaf<TimeCode>>,
    pub dq_info: Option<&'a Leaf<DqInfoRecord>>,
    pub heat: Option<&'a Leaf<u32>>,
    pub lane: Option<&'a Leaf<u32>>,
    pub heat_place: Option<&'a Leaf<u32>>,
    pub overall_place: Option<&'a Leaf<u32>>,
    pub date: Option<&'a Leaf<NaiveDate>>,
    pub splits: Option<&'a Leaf<Splits>>,
}

/// The phases of an entry, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Seed,
    Prelim,
    Swimoff,
    Finals,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Seed, Phase::Prelim, Phase::Swimoff, Phase::Finals];

    /// Prefix of the phase's fields on [`EntryRecord`], and its output key.
    pub fn prefix(self) -> &'static str {
        match self {
            Phase::Seed => "seed",
            Phase::Prelim => "prelim",
            Phase::Swimoff => "swimoff",
            Phase::Finals => "finals",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

impl EntryRecord {
    /// The `{prefix}_*` fields for a timed phase. The seed block has its own
    /// field set and yields `None` here.
    pub fn phase(&self, phase: Phase) -> Option<PhaseFields<'_>> {
        let fields = match phase {
            Phase::Seed => return None,
            Phase::Prelim => PhaseFields {
                time: self.prelim_time.as_ref(),
                course: self.prelim_course.as_ref(),
                time_code: self.prelim_time_code.as_ref(),
                dq_info: self.prelim_dq_info.as_ref(),
                heat: self.prelim_heat.as_ref(),
                lane: self.prelim_lane.as_ref(),
                heat_place: self.prelim_heat_place.as_ref(),
                overall_place: self.prelim_overall_place.as_ref(),
                date: self.prelim_date.as_ref(),
                splits: self.prelim_splits.as_ref(),
            },
            Phase::Swimoff => PhaseFields {
                time: self.swimoff_time.as_ref(),
                course: self.swimoff_course.as_ref(),
                time_code: self.swimoff_time_code.as_ref(),
                dq_info: self.swimoff_dq_info.as_ref(),
                heat: self.swimoff_heat.as_ref(),
                lane: self.swimoff_lane.as_ref(),
                heat_place: self.swimoff_heat_place.as_ref(),
                overall_place: self.swimoff_overall_place.as_ref(),
                date: self.swimoff_date.as_ref(),
                splits: self.swimoff_splits.as_ref(),
            },
            Phase::Finals => PhaseFields {
                time: self.finals_time.as_ref(),
                course: self.finals_course.as_ref(),
                time_code: self.finals_time_code.as_ref(),
                dq_info: self.finals_dq_info.as_ref(),
                heat: self.finals_heat.as_ref(),
                lane: self.finals_lane.as_ref(),
                heat_place: self.finals_heat_place.as_ref(),
                overall_place: self.finals_overall_place.as_ref(),
                date: self.finals_date.as_ref(),
                splits: self.finals_splits.as_ref(),
            },
        };
        Some(fields)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Loading
// ============================================================================

impl ParsedFile {
    /// Load a parsed tree from its JSON dump.
    ///
    /// # Errors
    ///
    /// Returns [`ReshapeError::Json`] if `json` is not JSON at all, and
    /// [`ReshapeError::Shape`] if the meet or one of its collections is
    /// missing or has the wrong kind of value.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Load a parsed tree from an already-decoded JSON value.
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(ReshapeError::shape)
    }

    /// Fill in `country` on the meet and on every team that lacks one.
    pub fn with_default_country(&self, country: &str) -> Self {
        let mut file = self.clone();
        file.meet.country.get_or_insert_with(|| country.into());
        for team in file.meet.teams.values_mut() {
            team.country.get_or_insert_with(|| country.into());
        }
        file
    }

    /// The tree in the parser's own layout, with leaves in their normalized
    /// forms (ISO dates, symbolic enum names). Fields the parser left out
    /// stay out, and fields the model does not name are kept.
    pub fn to_raw_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ReshapeError::Serialize(e.to_string()))
    }
}
