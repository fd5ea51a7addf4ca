//! The record-serving route.

use crate::startup::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// `GET /admin`: serve the configured administrative record.
///
/// A missing record is a 404 with a JSON error body. Store failures are
/// logged server-side and answered with a generic body that carries no
/// detail about the underlying error.
pub async fn get_admin(State(state): State<AppState>) -> Response {
    let store = &state.store;
    let config = &state.config.store;

    match store.get_document(&config.collection, &config.record_id).await {
        Ok(Some(record)) => (StatusCode::OK, Json(record.into_body())).into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Admin not found" })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch admin record");
            (StatusCode::INTERNAL_SERVER_ERROR, "Error fetching admin").into_response()
        }
    }
}
