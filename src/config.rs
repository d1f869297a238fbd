//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::cache::Freshness;

/// Page the daily reading is scraped from.
pub const DEFAULT_SOURCE_URL: &str = "https://www.vaticannews.va/en/word-of-the-day.html";

/// Translation endpoint (segment-list response shape).
pub const DEFAULT_TRANSLATE_URL: &str = "https://translate.googleapis.com/translate_a/single";

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port
    pub server_port: u16,
    /// Language the source page is published in
    pub default_language: String,
    /// URL of the daily reading page
    pub source_url: String,
    /// URL of the translation endpoint
    pub translate_url: String,
    /// Cache expiry in seconds for the HTTP surface
    pub http_cache_ttl: u64,
    /// Cache expiry in seconds for the chat surface
    pub bot_cache_ttl: u64,
    /// How cache freshness is measured
    pub freshness: Freshness,
    /// Outbound request timeout in seconds, 0 = none
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `DEFAULT_LANGUAGE` - Source language (default: en)
    /// - `SOURCE_URL` - Daily reading page
    /// - `TRANSLATE_URL` - Translation endpoint
    /// - `HTTP_CACHE_TTL` - HTTP cache expiry in seconds (default: 10800)
    /// - `BOT_CACHE_TTL` - Chat cache expiry in seconds (default: 21600)
    /// - `CACHE_FRESHNESS` - `per-key` or `shared` (default: per-key)
    /// - `HTTP_TIMEOUT` - Outbound timeout in seconds (default: 30)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            default_language: env::var("DEFAULT_LANGUAGE")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.default_language),
            source_url: env::var("SOURCE_URL").unwrap_or(defaults.source_url),
            translate_url: env::var("TRANSLATE_URL").unwrap_or(defaults.translate_url),
            http_cache_ttl: parse_var("HTTP_CACHE_TTL").unwrap_or(defaults.http_cache_ttl),
            bot_cache_ttl: parse_var("BOT_CACHE_TTL").unwrap_or(defaults.bot_cache_ttl),
            freshness: parse_var("CACHE_FRESHNESS").unwrap_or(defaults.freshness),
            http_timeout: parse_var("HTTP_TIMEOUT").unwrap_or(defaults.http_timeout),
        }
    }

    /// Outbound request timeout, if one is configured.
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.http_timeout > 0).then(|| Duration::from_secs(self.http_timeout))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_port: 3000,
            default_language: "en".to_string(),
            source_url: DEFAULT_SOURCE_URL.to_string(),
            translate_url: DEFAULT_TRANSLATE_URL.to_string(),
            http_cache_ttl: 3 * 60 * 60,
            bot_cache_ttl: 6 * 60 * 60,
            freshness: Freshness::PerKey,
            http_timeout: 30,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
