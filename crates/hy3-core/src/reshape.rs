//! Assembly of the output document.
//!
//! ```text
//! {
//!   "file": { description, software, date_created, licensee },
//!   "meet": {
//!     name, facility, start_date, end_date, altitude, country, masters,
//!     type, course,
//!     "teams":    [ { code, ... } ],
//!     "swimmers": [ { meet_id, ... } ],
//!     "events":   [ { number, ..., "entries": [ ... ] } ]
//!   }
//! }
//! ```
//!
//! Either section is omitted when it has no fields at all.

use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info_span};

use crate::error::{ReshapeError, Result};
use crate::flatten::{flatten_events, flatten_swimmers, flatten_teams};
use crate::model::{MeetRecord, ParsedFile};
use crate::prune::{Record, RecordBuilder};

/// The reshaped document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<Record>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meet: Option<Record>,
}

impl Document {
    pub fn to_value(&self) -> Value {
        let mut root = Record::new();
        if let Some(file) = &self.file {
            root.insert("file".to_string(), Value::Object(file.clone()));
        }
        if let Some(meet) = &self.meet {
            root.insert("meet".to_string(), Value::Object(meet.clone()));
        }
        Value::Object(root)
    }
}

/// Reshape a parsed results tree into the output document.
///
/// The input is only read. The same input always yields the same document.
pub fn reshape(parsed: &ParsedFile) -> Document {
    let _span = info_span!("reshape").entered();

    let file = RecordBuilder::new()
        .field("description", &parsed.file_description)
        .field("software", &parsed.software)
        .field("date_created", &parsed.date_created)
        .field("licensee", &parsed.licensee)
        .build_optional();

    Document {
        file,
        meet: reshape_meet(&parsed.meet),
    }
}

fn reshape_meet(meet: &MeetRecord) -> Option<Record> {
    let teams = flatten_teams(&meet.teams);
    let swimmers = flatten_swimmers(&meet.swimmers);
    let events = flatten_events(&meet.events);
    debug!(
        teams = teams.len(),
        swimmers = swimmers.len(),
        events = events.len(),
        "flattened meet"
    );

    RecordBuilder::new()
        .field("name", &meet.name)
        .field("facility", &meet.facility)
        .field("start_date", &meet.start_date)
        .field("end_date", &meet.end_date)
        .field("altitude", &meet.altitude)
        .field("country", &meet.country)
        .field("masters", &meet.masters)
        .field("type", &meet.type_)
        .field("course", &meet.course)
        .list("teams", teams.into_iter().map(Value::Object).collect())
        .list("swimmers", swimmers.into_iter().map(Value::Object).collect())
        .list("events", events.into_iter().map(Value::Object).collect())
        .build_optional()
}

/// Decode a parsed tree from a JSON value and reshape it.
///
/// # Errors
///
/// Returns [`ReshapeError::Shape`] if `value` does not have the shape of a
/// parsed results tree. No partial document is produced.
pub fn reshape_value(value: &Value) -> Result<Value> {
    let parsed = ParsedFile::from_value(value.clone())?;
    Ok(reshape(&parsed).to_value())
}

/// Reshape a JSON dump of a parsed tree into compact output JSON.
///
/// # Examples
///
/// ```
/// use hy3_core::reshape_json;
///
/// let input = r#"{"software":"Meet Manager","meet":{"name":"Spring Open"}}"#;
/// let output = reshape_json(input).unwrap();
/// assert_eq!(
///     output,
///     r#"{"file":{"software":"Meet Manager"},"meet":{"name":"Spring Open","teams":[],"swimmers":[],"events":[]}}"#
/// );
/// ```
pub fn reshape_json(json: &str) -> Result<String> {
    let parsed = ParsedFile::from_json(json)?;
    serde_json::to_string(&reshape(&parsed)).map_err(|e| ReshapeError::Serialize(e.to_string()))
}
