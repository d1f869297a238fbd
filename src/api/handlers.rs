//! API Handlers
//!
//! HTTP request handlers for each gospel endpoint.

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use crate::error::{GospelError, Result, GENERIC_FAILURE_MESSAGE};
use crate::format::plain_text;
use crate::models::{GospelResponse, HealthResponse, LanguagesResponse, StatsResponse};
use crate::service::GospelService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Resolver and cache behind every gospel endpoint
    pub service: Arc<GospelService>,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(service: GospelService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    fn default_language(&self) -> String {
        self.service.default_language().to_string()
    }
}

/// Unwraps the `:lang` segment; an undecodable segment is an invalid language.
fn path_language(lang: std::result::Result<Path<String>, PathRejection>) -> Result<String> {
    lang.map(|Path(lang)| lang)
        .map_err(|rejection| GospelError::InvalidLanguage(rejection.body_text()))
}

/// Handler for GET /gospel
pub async fn default_gospel_handler(
    State(state): State<AppState>,
) -> Result<Json<GospelResponse>> {
    let language = state.default_language();
    serve_gospel(&state, &language).await
}

/// Handler for GET /gospel/:lang
pub async fn gospel_handler(
    State(state): State<AppState>,
    lang: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<GospelResponse>> {
    let language = path_language(lang).inspect_err(|e| {
        error!(error = %e, "Rejected gospel request");
    })?;
    serve_gospel(&state, &language).await
}

async fn serve_gospel(state: &AppState, language: &str) -> Result<Json<GospelResponse>> {
    let record = state.service.resolve(language).await.inspect_err(|e| {
        error!(error = %e, "Failed to serve gospel");
    })?;

    Ok(Json(GospelResponse::new(&record)))
}

/// Handler for GET /gospel-text
///
/// Same content as `/gospel`, rendered as plain text.
pub async fn default_gospel_text_handler(State(state): State<AppState>) -> Response {
    let language = state.default_language();
    serve_gospel_text(&state, Ok(language)).await
}

/// Handler for GET /gospel-text/:lang
pub async fn gospel_text_handler(
    State(state): State<AppState>,
    lang: std::result::Result<Path<String>, PathRejection>,
) -> Response {
    serve_gospel_text(&state, path_language(lang)).await
}

async fn serve_gospel_text(state: &AppState, language: Result<String>) -> Response {
    let resolved = match language {
        Ok(language) => state.service.resolve(&language).await,
        Err(e) => Err(e),
    };

    match resolved {
        Ok(record) => plain_text(&record).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to serve gospel text");
            let status = match e {
                GospelError::InvalidLanguage(_) => StatusCode::BAD_REQUEST,
                GospelError::Resolution { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, format!("Error: {}", GENERIC_FAILURE_MESSAGE)).into_response()
        }
    }
}

/// Handler for GET /supported-languages
pub async fn languages_handler() -> Json<LanguagesResponse> {
    Json(LanguagesResponse::common())
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.service.stats().await;
    Json(StatsResponse::new(
        &stats,
        state.service.cache_ttl().as_secs(),
    ))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
