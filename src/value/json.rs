use crate::error::ValueError;
use crate::value::types::{Key, Value};
use serde::Serialize;

impl Value {
    /// Converts decoded JSON into a dumpable value.
    ///
    /// Arrays become integer-keyed sequences and objects become name-keyed
    /// sequences in document order. Integers that fit in `i64` stay integers;
    /// every other number becomes a float.
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => Value::list(items.into_iter().map(Value::from_json)),
            serde_json::Value::Object(map) => Value::Array(
                map.into_iter()
                    .map(|(name, item)| (Key::Name(name), Value::from_json(item)))
                    .collect(),
            ),
        }
    }

    /// Converts anything serde can serialize, going through its JSON form.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> Result<Self, ValueError> {
        let json = serde_json::to_value(value)?;
        Ok(Value::from_json(json))
    }
}
