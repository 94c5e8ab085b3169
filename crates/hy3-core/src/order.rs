//! Event ordering.
//!
//! Event identifiers are strings, usually numeric ("1", "2", "10") but not
//! always ("TT", "1A"). Events are emitted in a total order:
//!
//! 1. identifiers that are integers (optional sign, decimal digits, any
//!    length), ascending by value, ties on value (`"1"` vs `"01"`) broken
//!    by raw string comparison;
//! 2. every other identifier, after all numeric ones, in raw
//!    (case-sensitive) string order.

use std::cmp::Ordering;

use crate::model::Keyed;

/// An integer event identifier of any length, compared by value.
///
/// Holds the sign and the digits without leading zeros, so `"007"`, `"+7"`
/// and `"7"` compare equal here. Zero is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventNumber<'a> {
    negative: bool,
    magnitude: &'a str,
}

impl<'a> EventNumber<'a> {
    /// Parse an optional `+`/`-` sign followed by one or more ASCII digits.
    pub fn parse(id: &'a str) -> Option<Self> {
        let (negative, digits) = match id.as_bytes().first() {
            Some(b'-') => (true, &id[1..]),
            Some(b'+') => (false, &id[1..]),
            _ => (false, id),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let magnitude = digits.trim_start_matches('0');
        Some(EventNumber {
            negative: negative && !magnitude.is_empty(),
            magnitude,
        })
    }

    fn cmp_magnitude(&self, other: &Self) -> Ordering {
        self.magnitude
            .len()
            .cmp(&other.magnitude.len())
            .then_with(|| self.magnitude.cmp(other.magnitude))
    }
}

impl Ord for EventNumber<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => self.cmp_magnitude(other),
            (true, true) => other.cmp_magnitude(self),
        }
    }
}

impl PartialOrd for EventNumber<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort key of one event identifier.
///
/// The derived ordering compares the variant first (numeric before
/// symbolic), then the fields in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventKey<'a> {
    Numeric(EventNumber<'a>, &'a str),
    Symbolic(&'a str),
}

impl<'a> EventKey<'a> {
    pub fn of(id: &'a str) -> Self {
        match EventNumber::parse(id) {
            Some(number) => EventKey::Numeric(number, id),
            None => EventKey::Symbolic(id),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, EventKey::Numeric(..))
    }
}

/// Compare two event identifiers.
///
/// # Examples
///
/// ```
/// use hy3_core::compare_event_ids;
///
/// let mut ids = vec!["10", "TT", "2", "1"];
/// ids.sort_by(|a, b| compare_event_ids(a, b));
/// assert_eq!(ids, ["1", "2", "10", "TT"]);
/// ```
pub fn compare_event_ids(a: &str, b: &str) -> Ordering {
    EventKey::of(a).cmp(&EventKey::of(b))
}

/// The events of a meet in emission order.
pub fn sorted_events<T>(events: &Keyed<T>) -> Vec<(&str, &T)> {
    let mut sorted: Vec<(&str, &T)> = events.iter().collect();
    sorted.sort_by(|(a, _), (b, _)| compare_event_ids(a, b));
    sorted
}
