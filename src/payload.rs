//! Free-form payload records carried by a snapshot.

use std::convert::TryFrom;
use std::ops::Index;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{UiStateError, UiStateResult};

/// The fields associated with a snapshot's status.
///
/// Arity and shape are free per status; nothing is validated on construction.
/// [`Payload::decode`] is the opt-in way to read the fields as a typed record.
///
/// # Example
/// ```
/// use ui_state::Payload;
/// use serde_json::json;
///
/// let payload = Payload::new().with("total", 3).with("label", "items");
/// assert_eq!(payload.get("total"), Some(&json!(3)));
/// assert_eq!(payload.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    /// An empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a field.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Build a payload from any record-shaped serializable value.
    pub fn from_serialize<T: Serialize>(record: &T) -> UiStateResult<Self> {
        Self::try_from(serde_json::to_value(record)?)
    }

    /// Deserialize the fields into a typed record.
    pub fn decode<T: DeserializeOwned>(&self) -> UiStateResult<T> {
        Ok(T::deserialize(Value::Object(self.0.clone()))?)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Field names, in key order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Missing fields index as `null`, mirroring an absent record field.
impl<'f> Index<&'f str> for Payload {
    type Output = Value;

    fn index(&self, field: &'f str) -> &Value {
        static NULL: Value = Value::Null;
        self.0.get(field).unwrap_or(&NULL)
    }
}

impl TryFrom<Value> for Payload {
    type Error = UiStateError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            Value::Null => Err(UiStateError::PayloadNotObject { kind: "null" }),
            Value::Bool(_) => Err(UiStateError::PayloadNotObject { kind: "a boolean" }),
            Value::Number(_) => Err(UiStateError::PayloadNotObject { kind: "a number" }),
            Value::String(_) => Err(UiStateError::PayloadNotObject { kind: "a string" }),
            Value::Array(_) => Err(UiStateError::PayloadNotObject { kind: "an array" }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Listing {
        items: Vec<u32>,
        total: u32,
    }

    #[test]
    fn test_from_serialize_record() {
        let payload = Payload::from_serialize(&Listing {
            items: vec![1, 2, 3],
            total: 3,
        })
        .unwrap();

        assert_eq!(payload.get("total"), Some(&json!(3)));
        assert_eq!(payload.fields().collect::<Vec<_>>(), vec!["items", "total"]);
    }

    #[test]
    fn test_decode_round_trip() {
        let payload = Payload::new().with("items", json!([1, 2, 3])).with("total", 3);
        let listing: Listing = payload.decode().unwrap();
        assert_eq!(listing.total, 3);
        assert_eq!(listing.items, vec![1, 2, 3]);
    }

    #[test]
    fn test_decode_wrong_shape() {
        let payload = Payload::new().with("total", "three");
        let err = payload.decode::<Listing>().unwrap_err();
        assert!(matches!(err, UiStateError::Decode(_)));
    }

    #[test]
    fn test_non_record_is_rejected() {
        let err = Payload::try_from(json!([1, 2])).unwrap_err();
        insta::assert_snapshot!(err.to_string(), @"payload must be a record, found an array");

        let err = Payload::from_serialize(&42).unwrap_err();
        assert!(matches!(err, UiStateError::PayloadNotObject { kind: "a number" }));
    }

    #[test]
    fn test_nested_structures_are_kept() {
        let payload = Payload::try_from(json!({
            "user": { "name": "John", "age": 30, "preferences": { "theme": "dark" } },
            "settings": { "notifications": true },
        }))
        .unwrap();

        assert_eq!(payload["user"]["preferences"]["theme"], "dark");
        assert_eq!(payload["settings"]["notifications"], true);
    }
}
