//! # hy3-core
//!
//! Reshapes a parsed **Hytek HY3** meet results tree into a compact,
//! relationally linked JSON document.
//!
//! The parser delivers a deeply nested tree: teams, swimmers and events keyed
//! by identifier, and full swimmer records embedded in every entry. This
//! crate turns that into flat lists, refers to swimmers by `meet_id`, groups
//! each entry's timing data into seed / prelim / swim-off / finals legs, and
//! prunes every absent or empty field.
//!
//! ## Quick start
//!
//! ```rust
//! use hy3_core::reshape_json;
//!
//! let input = r#"{
//!   "meet": {
//!     "teams": {"ABC": {"name": "Acme Club"}},
//!     "swimmers": {"7": {"first_name": "Jo"}},
//!     "events": {"1": {"distance": 50, "entries": [
//!       {"swimmers": [{"meet_id": 7}], "finals_time": "25.31", "finals_course": "SCY"}
//!     ]}}
//!   }
//! }"#;
//! let output = reshape_json(input).unwrap();
//! assert!(output.contains(r#""swimmers":[7]"#));
//! assert!(output.contains(r#""finals":{"time":"25.31","course":"SCY"}"#));
//! ```
//!
//! ## Modules
//!
//! - [`model`]: the parsed input tree
//! - [`types`]: enumerated leaf values (course, stroke, gender, ...)
//! - [`normalize`]: leaf values → JSON (ISO dates, symbolic names)
//! - [`prune`]: null / empty-object elision for output records
//! - [`order`]: event identifier ordering
//! - [`leg`]: seed and per-phase leg records
//! - [`flatten`]: keyed collections → lists with explicit keys
//! - [`reshape`]: assembly of the final document
//! - [`error`]: error types

pub mod error;
pub mod flatten;
pub mod leg;
pub mod model;
pub mod normalize;
pub mod order;
pub mod prune;
pub mod reshape;
pub mod types;

pub use error::ReshapeError;
pub use leg::{build_dq, build_leg, build_seed};
pub use model::{
    DqInfoRecord, EntryRecord, EventRecord, Keyed, Leaf, MeetId, MeetRecord, ParsedFile, Phase,
    Splits, SwimTime, SwimmerRecord, TeamRecord, Temporal,
};
pub use normalize::Normalize;
pub use order::{compare_event_ids, sorted_events, EventKey, EventNumber};
pub use prune::{prune, Record, RecordBuilder};
pub use reshape::{reshape, reshape_json, reshape_value, Document};
pub use types::Symbolic;
