//! Records and canonical identifiers.
//!
//! Backend objects arrive with either an `id` or a `_id` field, as a string
//! or a number. Normalization happens once, at ingest: `id` wins, `_id` is
//! the fallback, and everything downstream works with a single [`RecordId`].

use std::fmt;

use serde_json::{Map, Value};

use crate::error::{ModelError, Result};

/// Canonical record identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract an id from a raw JSON value (string or integer).
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Self(s.clone())),
            Value::Number(n) => Some(Self(n.to_string())),
            _ => None,
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// A backend entity: canonical id plus its raw field map.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    id: RecordId,
    fields: Map<String, Value>,
}

impl Record {
    /// Ingest a raw JSON object, normalizing the identifier.
    ///
    /// Prefers `id`, falls back to `_id`. An object carrying neither is
    /// rejected rather than propagated id-less.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(fields) = value else {
            return Err(ModelError::NotAnObject(json_kind(&value)));
        };
        let id = fields
            .get("id")
            .and_then(RecordId::from_value)
            .or_else(|| fields.get("_id").and_then(RecordId::from_value))
            .ok_or(ModelError::MissingId)?;
        Ok(Self { id, fields })
    }

    /// Ingest a JSON array of objects.
    pub fn from_list(value: Value) -> Result<Vec<Self>> {
        let Value::Array(items) = value else {
            return Err(ModelError::NotAnArray(json_kind(&value)));
        };
        items.into_iter().map(Self::from_value).collect()
    }

    pub fn id(&self) -> &RecordId {
        &self.id
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Raw field value, if present and non-null.
    pub fn value(&self, field: &str) -> Option<&Value> {
        self.fields.get(field).filter(|v| !v.is_null())
    }

    /// Field as text; missing or non-string fields render through
    /// `to_string` semantics, absent fields are empty.
    pub fn text(&self, field: &str) -> String {
        match self.value(field) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(b)) => b.to_string(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }

    /// Field as a number; missing or non-numeric values coerce to 0.
    pub fn number(&self, field: &str) -> f64 {
        match self.value(field) {
            Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Field as a flag; anything but `true` is `false`.
    pub fn flag(&self, field: &str) -> bool {
        matches!(self.value(field), Some(Value::Bool(true)))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn prefers_primary_id() {
        let record = Record::from_value(json!({"id": "a", "_id": "b"})).unwrap();
        assert_eq!(record.id().as_str(), "a");
    }

    #[test]
    fn falls_back_to_secondary_id() {
        let record = Record::from_value(json!({"_id": "5", "name": "x"})).unwrap();
        assert_eq!(record.id().as_str(), "5");
    }

    #[test]
    fn numeric_id_is_stringified() {
        let record = Record::from_value(json!({"id": 42})).unwrap();
        assert_eq!(record.id().as_str(), "42");
    }

    #[test]
    fn missing_id_is_rejected() {
        let err = Record::from_value(json!({"name": "x"})).unwrap_err();
        assert!(matches!(err, ModelError::MissingId));
    }

    #[test]
    fn accessors_coerce() {
        let record = Record::from_value(json!({
            "id": "1",
            "name": "Apple",
            "stock": "12",
            "price": 9.5,
            "isActive": true,
        }))
        .unwrap();
        assert_eq!(record.text("name"), "Apple");
        assert_eq!(record.number("stock"), 12.0);
        assert_eq!(record.number("price"), 9.5);
        assert_eq!(record.number("missing"), 0.0);
        assert!(record.flag("isActive"));
        assert!(!record.flag("missing"));
    }
}
