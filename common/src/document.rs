//! Document handles as returned by the document store.
//!
//! Firestore's REST API wraps every field in a typed envelope
//! (`{"stringValue": "..."}`, `{"integerValue": "42"}`, ...).  This module
//! flattens those envelopes into plain JSON so the record mapper only ever
//! sees `name -> value` pairs.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An opaque reference into the document store: an identifier plus a
/// named-field accessor.
pub trait DocumentHandle {
    fn id(&self) -> &str;
    fn field(&self, key: &str) -> Option<&Value>;

    fn str_field(&self, key: &str) -> Option<String> {
        self.field(key).and_then(Value::as_str).map(str::to_string)
    }

    fn f64_field(&self, key: &str) -> Option<f64> {
        self.field(key).and_then(Value::as_f64)
    }

    /// Absent or non-boolean fields read as `false`.
    fn bool_field(&self, key: &str) -> bool {
        self.field(key).and_then(Value::as_bool).unwrap_or(false)
    }
}

/// A plain document: identifier plus flattened fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl DocumentHandle for Document {
    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl Document {
    pub fn new(id: impl Into<String>) -> Self {
        Document {
            id: id.into(),
            fields: Map::new(),
        }
    }

    /// Builder-style setter, mostly for fixtures and tests.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// Decode a Firestore REST `Document` resource.
    ///
    /// The id is the last path segment of `name`
    /// (`projects/p/databases/(default)/documents/restaurants/<id>`).
    /// Returns `None` when `name` is missing.
    pub fn from_firestore(doc: &Value) -> Option<Self> {
        let name = doc.get("name")?.as_str()?;
        let id = name.rsplit('/').next().filter(|s| !s.is_empty())?;

        let fields = doc
            .get("fields")
            .and_then(Value::as_object)
            .map(decode_fields)
            .unwrap_or_default();

        Some(Document {
            id: id.to_string(),
            fields,
        })
    }
}

fn decode_fields(fields: &Map<String, Value>) -> Map<String, Value> {
    fields
        .iter()
        .map(|(k, v)| (k.clone(), decode_value(v)))
        .collect()
}

/// Flatten one Firestore typed value.  Unknown envelopes decode to `null`.
pub fn decode_value(value: &Value) -> Value {
    let Some(obj) = value.as_object() else {
        return Value::Null;
    };
    let Some((kind, inner)) = obj.iter().next() else {
        return Value::Null;
    };

    match kind.as_str() {
        "stringValue" | "referenceValue" | "timestampValue" | "booleanValue" | "doubleValue" => {
            inner.clone()
        }
        // 64-bit integers travel as strings.
        "integerValue" => match inner {
            Value::String(s) => s.parse::<i64>().map(Value::from).unwrap_or(Value::Null),
            other => other.clone(),
        },
        "mapValue" => inner
            .get("fields")
            .and_then(Value::as_object)
            .map(|f| Value::Object(decode_fields(f)))
            .unwrap_or_else(|| Value::Object(Map::new())),
        "arrayValue" => Value::Array(
            inner
                .get("values")
                .and_then(Value::as_array)
                .map(|vals| vals.iter().map(decode_value).collect())
                .unwrap_or_default(),
        ),
        _ => Value::Null,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_firestore_fields() {
        let raw = json!({
            "name": "projects/demo/databases/(default)/documents/restaurants/abc123",
            "fields": {
                "name": { "stringValue": "Noodle Box" },
                "average_rating": { "doubleValue": 4.5 },
                "average_cost": { "integerValue": "2" },
                "isMaskRequired": { "booleanValue": true },
                "phone_number": { "nullValue": null },
                "tags": { "arrayValue": { "values": [ { "stringValue": "thai" } ] } },
                "geo": { "mapValue": { "fields": { "lat": { "doubleValue": 49.2 } } } }
            }
        });

        let doc = Document::from_firestore(&raw).unwrap();
        assert_eq!(doc.id(), "abc123");
        assert_eq!(doc.str_field("name").as_deref(), Some("Noodle Box"));
        assert_eq!(doc.f64_field("average_rating"), Some(4.5));
        assert_eq!(doc.f64_field("average_cost"), Some(2.0));
        assert!(doc.bool_field("isMaskRequired"));
        assert_eq!(doc.field("phone_number"), Some(&Value::Null));
        assert_eq!(doc.field("tags"), Some(&json!(["thai"])));
        assert_eq!(doc.field("geo"), Some(&json!({ "lat": 49.2 })));
    }

    #[test]
    fn test_from_firestore_without_name() {
        assert!(Document::from_firestore(&json!({ "fields": {} })).is_none());
    }

    #[test]
    fn test_from_firestore_without_fields() {
        let doc = Document::from_firestore(&json!({ "name": "a/b/c/xyz" })).unwrap();
        assert_eq!(doc.id, "xyz");
        assert!(doc.fields.is_empty());
    }

    #[test]
    fn test_bool_field_wrong_type_is_false() {
        let doc = Document::new("1").with("isTakeoutAvailable", "yes");
        assert!(!doc.bool_field("isTakeoutAvailable"));
        assert!(!doc.bool_field("missing"));
    }

    #[test]
    fn test_fixture_shape_deserializes() {
        let doc: Document =
            serde_json::from_value(json!({ "id": "r1", "name": "Cafe", "isDineInAvailable": true }))
                .unwrap();
        assert_eq!(doc.id, "r1");
        assert!(doc.bool_field("isDineInAvailable"));
        assert!(doc.field("id").is_none());
    }
}
