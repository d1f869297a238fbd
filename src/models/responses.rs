//! Response DTOs for the gospel API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::CacheStats;
use crate::models::{GospelContent, GospelRecord, Language, COMMON_LANGUAGES};

/// Response body for GET /gospel/:lang
#[derive(Debug, Clone, Serialize)]
pub struct GospelResponse {
    pub success: bool,
    /// Requested language code
    pub language: String,
    /// Publication date in the source language
    pub date: String,
    /// Content in the requested language
    pub content: GospelContent,
}

impl GospelResponse {
    /// Creates a new GospelResponse from a resolved record
    pub fn new(record: &GospelRecord) -> Self {
        Self {
            success: true,
            language: record.language.clone(),
            date: record.date().to_string(),
            content: record.content().clone(),
        }
    }
}

/// Response body for GET /supported-languages
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagesResponse {
    pub success: bool,
    pub message: String,
    pub common_languages: Vec<Language>,
}

impl LanguagesResponse {
    /// Creates the static language listing
    pub fn common() -> Self {
        Self {
            success: true,
            message: "All languages available in Google Translate are supported".to_string(),
            common_languages: COMMON_LANGUAGES.to_vec(),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that triggered a resolution
    pub misses: u64,
    /// Resolutions that failed
    pub failures: u64,
    /// Languages currently cached
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
    /// Cache expiry in seconds
    pub ttl_secs: u64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats, ttl_secs: u64) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            failures: stats.failures,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
            ttl_secs,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
