//! Firestore REST client for the administrative record.
//!
//! Wraps the one lookup the service needs:
//! `GET {base}/projects/{project}/databases/(default)/documents/{collection}/{id}`.
//! Documents arrive with typed field values which are decoded into plain
//! JSON before they reach a handler.

use super::auth::TokenProvider;
use super::StoreError;
use crate::models::AdminRecord;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// Client for the document store's REST API.
#[derive(Clone)]
pub struct FirestoreClient {
    client: Client,
    token_provider: TokenProvider,
    api_base_url: String,
    project_id: String,
}

impl FirestoreClient {
    /// Create a client bound to one project.
    pub fn new(token_provider: TokenProvider, api_base_url: &str, project_id: &str) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            token_provider,
            api_base_url: api_base_url.to_string(),
            project_id: project_id.to_string(),
        }
    }

    /// Build the document URL for a collection/id pair.
    fn document_url(&self, collection: &str, document_id: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}/{}",
            self.api_base_url, self.project_id, collection, document_id
        )
    }

    /// Fetch one document by identifier.
    ///
    /// Returns `Ok(None)` when the document does not exist. Transport,
    /// authentication, and API failures are errors.
    pub async fn get_document(
        &self,
        collection: &str,
        document_id: &str,
    ) -> Result<Option<AdminRecord>, StoreError> {
        let token = self.token_provider.access_token().await?;
        let url = self.document_url(collection, document_id);

        tracing::debug!(
            collection = %collection,
            document_id = %document_id,
            "Fetching document"
        );

        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            tracing::debug!(document_id = %document_id, "Document does not exist");
            return Ok(None);
        }

        let body = response
            .text()
            .await
            .map_err(|e| StoreError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            let error: GoogleErrorBody =
                serde_json::from_str(&body).unwrap_or_else(|_| GoogleErrorBody {
                    error: GoogleErrorDetail {
                        code: i32::from(status.as_u16()),
                        message: body.clone(),
                        status: None,
                    },
                });
            tracing::error!(
                status = %status,
                code = error.error.code,
                message = %error.error.message,
                "Document fetch failed"
            );
            return Err(StoreError::ApiError {
                status: status.as_u16(),
                message: error.error.message,
            });
        }

        let document: FirestoreDocument =
            serde_json::from_str(&body).map_err(|e| StoreError::MalformedResponse(e.to_string()))?;

        Ok(Some(document.into_record()))
    }
}

/// Document resource as returned by the REST API.
#[derive(Debug, Deserialize)]
struct FirestoreDocument {
    /// Full resource name, `projects/.../documents/{collection}/{id}`.
    name: String,
    #[serde(default)]
    fields: BTreeMap<String, FieldValue>,
}

impl FirestoreDocument {
    fn into_record(self) -> AdminRecord {
        let id = self
            .name
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();

        let fields = self
            .fields
            .into_iter()
            .map(|(k, v)| (k, v.into_json()))
            .collect();

        AdminRecord { id, fields }
    }
}

/// One typed field value in Firestore's wire encoding.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
enum FieldValue {
    StringValue(String),
    // int64 crosses the wire as a decimal string
    IntegerValue(String),
    DoubleValue(f64),
    BooleanValue(bool),
    TimestampValue(String),
    NullValue(()),
    MapValue(MapPayload),
    ArrayValue(ArrayPayload),
    BytesValue(String),
    ReferenceValue(String),
    GeoPointValue(GeoPoint),
}

#[derive(Debug, Clone, Deserialize)]
struct MapPayload {
    #[serde(default)]
    fields: BTreeMap<String, FieldValue>,
}

#[derive(Debug, Clone, Deserialize)]
struct ArrayPayload {
    #[serde(default)]
    values: Vec<FieldValue>,
}

#[derive(Debug, Clone, Deserialize)]
struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

impl FieldValue {
    /// Decode the typed wire value into plain JSON.
    fn into_json(self) -> Value {
        match self {
            FieldValue::StringValue(s) => Value::String(s),
            FieldValue::IntegerValue(s) => match s.parse::<i64>() {
                Ok(n) => Value::Number(n.into()),
                Err(_) => Value::String(s),
            },
            FieldValue::DoubleValue(f) => {
                Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null)
            }
            FieldValue::BooleanValue(b) => Value::Bool(b),
            FieldValue::TimestampValue(s) => Value::String(s),
            FieldValue::NullValue(()) => Value::Null,
            FieldValue::MapValue(m) => Value::Object(
                m.fields
                    .into_iter()
                    .map(|(k, v)| (k, v.into_json()))
                    .collect(),
            ),
            FieldValue::ArrayValue(a) => {
                Value::Array(a.values.into_iter().map(FieldValue::into_json).collect())
            }
            FieldValue::BytesValue(s) => Value::String(s),
            FieldValue::ReferenceValue(s) => Value::String(s),
            FieldValue::GeoPointValue(p) => serde_json::json!({
                "latitude": p.latitude,
                "longitude": p.longitude,
            }),
        }
    }
}

/// Error payload Google APIs attach to non-success responses.
#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    error: GoogleErrorDetail,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorDetail {
    code: i32,
    message: String,
    #[allow(dead_code)]
    status: Option<String>,
}
