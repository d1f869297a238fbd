//! API Module
//!
//! HTTP handlers and routing for the gospel REST API.
//!
//! # Endpoints
//! - `GET /gospel/:lang?` - Today's reading as JSON
//! - `GET /gospel-text/:lang?` - Today's reading as plain text
//! - `GET /supported-languages` - Common language codes
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
