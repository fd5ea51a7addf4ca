//! AI provider clients.

pub mod gemini;

use thiserror::Error;

pub use gemini::GeminiClient;

/// Error type for provider operations.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Empty response from model")]
    EmptyResponse,
}
