//! Domain records and HTTP response models
//!
//! This module defines the gospel records produced by a resolution and the
//! DTOs (Data Transfer Objects) serialized into HTTP response bodies.

pub mod gospel;
pub mod languages;
pub mod responses;

// Re-export commonly used types
pub use gospel::{GospelContent, GospelRecord};
pub use languages::{is_valid_language_code, Language, COMMON_LANGUAGES};
pub use responses::{
    ErrorResponse, GospelResponse, HealthResponse, LanguagesResponse, StatsResponse,
};
