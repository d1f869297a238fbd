//! Error types for the gospel service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Generic message shown to API and chat users when a resolution fails.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to retrieve gospel reading";

// == Fetch Error ==
/// Failure to retrieve or scrape the source page.
///
/// Fatal to the current resolution; no partial content is ever produced.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Network failure or non-success HTTP status
    #[error("Source request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The page was fetched but a required region was absent or empty
    #[error("Source page is missing the {0}")]
    MissingField(&'static str),
}

// == Translate Error ==
/// Failure of a single translation call.
///
/// Never leaves the translator: every variant is mapped to "use the original text".
#[derive(Error, Debug)]
pub enum TranslateError {
    /// Network failure or non-success HTTP status
    #[error("Translation request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body did not have the expected segment-list shape
    #[error("Malformed translation response")]
    Malformed,

    /// Response contained no translated segments
    #[error("Translation response was empty")]
    Empty,
}

// == Gospel Error ==
/// The only error type that crosses the core boundary to callers.
#[derive(Error, Debug)]
pub enum GospelError {
    /// Resolution failed at the fetch stage
    #[error("Failed to resolve gospel for '{language}'")]
    Resolution {
        language: String,
        #[source]
        source: FetchError,
    },

    /// The requested language code is not well formed
    #[error("Invalid language code: {0}")]
    InvalidLanguage(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for GospelError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            GospelError::Resolution { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_FAILURE_MESSAGE.to_string(),
            ),
            GospelError::InvalidLanguage(_) => (StatusCode::BAD_REQUEST, self.to_string()),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the gospel service.
pub type Result<T> = std::result::Result<T, GospelError>;
