//! Sparse pruning of output records.
//!
//! Every record in the output document is built field-by-field and then
//! pruned: fields whose value is `null` or an empty object are omitted.
//! Pruning is shallow. Records are assembled bottom-up, so a parent sees
//! each child after the child has already been pruned and can tell whether
//! it collapsed away entirely.
//!
//! Empty arrays are values, not absence, and are kept.

use serde_json::{Map, Value};

use crate::normalize::Normalize;

/// An output record: field name → value, in construction order.
pub type Record = Map<String, Value>;

/// Return a copy of `record` without `null` fields and empty-object fields.
///
/// The input is left untouched. Only the top level is inspected.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use hy3_core::prune;
///
/// let record = json!({"time": "25.31", "heat": null, "splits": {}, "swimmers": []});
/// let pruned = prune(record.as_object().unwrap());
/// assert_eq!(serde_json::Value::Object(pruned), json!({"time": "25.31", "swimmers": []}));
/// ```
pub fn prune(record: &Record) -> Record {
    record
        .iter()
        .filter(|(_, value)| !is_absent(value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Whether `value` counts as absent for pruning purposes.
fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

/// Builds one output record and prunes it on completion.
///
/// Fields are normalized as they are added, and keep the order in which
/// they were added.
#[derive(Debug, Default)]
pub struct RecordBuilder {
    fields: Record,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a leaf field, normalizing its value.
    pub fn field<T: Normalize + ?Sized>(mut self, name: &str, value: &T) -> Self {
        self.fields.insert(name.to_string(), value.normalize());
        self
    }

    /// Add an already-built child record. `None` is an absent child.
    pub fn child(mut self, name: &str, record: Option<Record>) -> Self {
        self.fields
            .insert(name.to_string(), record.map_or(Value::Null, Value::Object));
        self
    }

    /// Add a list of already-built values.
    pub fn list(mut self, name: &str, items: Vec<Value>) -> Self {
        self.fields.insert(name.to_string(), Value::Array(items));
        self
    }

    /// Add parser fields the model does not know about, verbatim. Names
    /// already present on the record keep their existing value.
    pub fn passthrough(mut self, extra: &Map<String, Value>) -> Self {
        for (key, value) in extra {
            if !self.fields.contains_key(key) {
                self.fields.insert(key.clone(), value.clone());
            }
        }
        self
    }

    /// The pruned record, possibly empty.
    pub fn build(self) -> Record {
        prune(&self.fields)
    }

    /// The pruned record, or `None` if every field pruned away.
    pub fn build_optional(self) -> Option<Record> {
        let record = self.build();
        if record.is_empty() {
            None
        } else {
            Some(record)
        }
    }
}
