//! The administrative record as served to clients.

use serde_json::{Map, Value};

/// One document fetched from the store, decoded to plain JSON fields.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminRecord {
    /// Document identifier within its collection.
    pub id: String,
    /// Stored field mapping, open-ended.
    pub fields: Map<String, Value>,
}

impl AdminRecord {
    /// Flatten the record into the response body shape.
    ///
    /// The identifier is inserted after the stored fields, so a stored
    /// field named `id` can never shadow the document identifier.
    pub fn into_body(self) -> Value {
        let mut body = self.fields;
        body.insert("id".to_string(), Value::String(self.id));
        Value::Object(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn into_body_merges_identifier_with_fields() {
        let mut fields = Map::new();
        fields.insert("email".to_string(), json!("admin@example.com"));
        fields.insert("quota".to_string(), json!(42));

        let record = AdminRecord {
            id: "doc-1".to_string(),
            fields,
        };

        let body = record.into_body();
        assert_eq!(body["id"], "doc-1");
        assert_eq!(body["email"], "admin@example.com");
        assert_eq!(body["quota"], 42);
    }

    #[test]
    fn identifier_wins_over_stored_id_field() {
        let mut fields = Map::new();
        fields.insert("id".to_string(), json!("spoofed"));

        let record = AdminRecord {
            id: "doc-1".to_string(),
            fields,
        };

        let body = record.into_body();
        assert_eq!(body["id"], "doc-1");
    }

    #[test]
    fn empty_record_serializes_to_identifier_only() {
        let record = AdminRecord {
            id: "doc-1".to_string(),
            fields: Map::new(),
        };

        let body = record.into_body();
        assert_eq!(body, json!({ "id": "doc-1" }));
    }
}
