//! Leaf value normalization.
//!
//! Converts typed leaves of the parsed tree into JSON values:
//!
//! - dates and date-times → ISO-8601 strings
//! - enumerated values → their symbolic name, never an ordinal
//! - everything else → unchanged
//!
//! Values the converter has no model for (parser fields carried as
//! [`serde_json::Value`], or the `Other` side of a [`Leaf`]) pass through as
//! they are.

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{Map, Number, Value};

use crate::model::{Keyed, Leaf, MeetId, SwimTime, Temporal};
use crate::types::{Course, Gender, GenderAge, MeetType, Stroke, Symbolic, TimeCode};

/// Conversion of a leaf (or a container of leaves) into its output form.
pub trait Normalize {
    fn normalize(&self) -> Value;
}

impl Normalize for NaiveDate {
    fn normalize(&self) -> Value {
        Value::String(self.format("%Y-%m-%d").to_string())
    }
}

impl Normalize for NaiveDateTime {
    fn normalize(&self) -> Value {
        // `%.f` drops the fraction entirely when it is zero.
        Value::String(self.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
    }
}

impl Normalize for Temporal {
    fn normalize(&self) -> Value {
        match self {
            Temporal::DateTime(dt) => dt.normalize(),
            Temporal::Date(d) => d.normalize(),
        }
    }
}

macro_rules! normalize_by_name {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Normalize for $ty {
                fn normalize(&self) -> Value {
                    Value::String(self.name().to_string())
                }
            }
        )*
    };
}

normalize_by_name!(Course, Stroke, Gender, GenderAge, MeetType, TimeCode);

impl Normalize for str {
    fn normalize(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Normalize for String {
    fn normalize(&self) -> Value {
        Value::String(self.clone())
    }
}

impl Normalize for bool {
    fn normalize(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Normalize for i64 {
    fn normalize(&self) -> Value {
        Value::Number((*self).into())
    }
}

impl Normalize for u32 {
    fn normalize(&self) -> Value {
        Value::Number((*self).into())
    }
}

impl Normalize for f64 {
    /// Non-finite floats have no JSON form and become `null`.
    fn normalize(&self) -> Value {
        Number::from_f64(*self).map_or(Value::Null, Value::Number)
    }
}

impl Normalize for MeetId {
    fn normalize(&self) -> Value {
        match self {
            MeetId::Integer(n) => n.normalize(),
            MeetId::Raw(s) => s.normalize(),
        }
    }
}

impl Normalize for SwimTime {
    fn normalize(&self) -> Value {
        match self {
            SwimTime::Seconds(secs) => secs.normalize(),
            SwimTime::Text(text) => text.normalize(),
        }
    }
}

impl<T: Normalize> Normalize for Leaf<T> {
    fn normalize(&self) -> Value {
        match self {
            Leaf::Known(value) => value.normalize(),
            Leaf::Other(raw) => raw.clone(),
        }
    }
}

impl Normalize for Value {
    fn normalize(&self) -> Value {
        self.clone()
    }
}

impl<T: Normalize + ?Sized> Normalize for &T {
    fn normalize(&self) -> Value {
        (**self).normalize()
    }
}

impl<T: Normalize> Normalize for Option<T> {
    fn normalize(&self) -> Value {
        self.as_ref().map_or(Value::Null, Normalize::normalize)
    }
}

impl<T: Normalize> Normalize for [T] {
    fn normalize(&self) -> Value {
        Value::Array(self.iter().map(Normalize::normalize).collect())
    }
}

impl<T: Normalize> Normalize for Vec<T> {
    fn normalize(&self) -> Value {
        self.as_slice().normalize()
    }
}

impl<T: Normalize> Normalize for Keyed<T> {
    fn normalize(&self) -> Value {
        let map: Map<String, Value> = self
            .iter()
            .map(|(key, value)| (key.to_string(), value.normalize()))
            .collect();
        Value::Object(map)
    }
}
