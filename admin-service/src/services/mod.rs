//! External service clients for the admin service.

pub mod auth;
pub mod credentials;
pub mod firestore;

use thiserror::Error;

pub use auth::TokenProvider;
pub use credentials::ServiceAccountKey;
pub use firestore::FirestoreClient;

/// Error type for document store operations.
///
/// A missing document is not an error; it is the `Ok(None)` arm of
/// [`FirestoreClient::get_document`].
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    #[error("Store API error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Malformed store response: {0}")]
    MalformedResponse(String),
}
