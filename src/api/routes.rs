//! API Routes
//!
//! Configures the Axum router with all gospel endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    default_gospel_handler, default_gospel_text_handler, gospel_handler, gospel_text_handler,
    health_handler, languages_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// The language segment is optional on both gospel routes; without it the
/// service's default language is served. A segment that does not decode is a 400.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/gospel", get(default_gospel_handler))
        .route("/gospel/:lang", get(gospel_handler))
        .route("/gospel-text", get(default_gospel_text_handler))
        .route("/gospel-text/:lang", get(gospel_text_handler))
        .route("/supported-languages", get(languages_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
