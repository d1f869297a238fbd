//! Gospel Service
//!
//! The single entry point used by the delivery surfaces: validates the
//! language, then answers from the cache or resolves afresh.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tracing::info;

use crate::cache::{CacheStats, Freshness, TtlCache};
use crate::config::Config;
use crate::error::{GospelError, Result};
use crate::models::{is_valid_language_code, GospelRecord};
use crate::resolver::GospelResolver;
use crate::source::VaticanNewsFetcher;
use crate::translate::GoogleTranslator;

/// Resolver plus its cache. One instance per delivery surface.
pub struct GospelService {
    resolver: GospelResolver,
    cache: TtlCache<GospelRecord>,
}

impl GospelService {
    /// Creates a service whose cache entries expire after `ttl`.
    pub fn new(resolver: GospelResolver, ttl: Duration, freshness: Freshness) -> Self {
        Self {
            resolver,
            cache: TtlCache::new(ttl, freshness),
        }
    }

    /// Wires the real page fetcher and translator from configuration.
    ///
    /// `ttl_secs` is the surface-specific cache expiry.
    pub fn from_config(config: &Config, ttl_secs: u64) -> std::result::Result<Self, reqwest::Error> {
        let mut builder = Client::builder().user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        let source = VaticanNewsFetcher::new(client.clone(), config.source_url.clone());
        let translator = GoogleTranslator::new(
            client,
            config.translate_url.clone(),
            config.default_language.clone(),
        );
        let resolver = GospelResolver::new(
            Arc::new(source),
            Arc::new(translator),
            config.default_language.clone(),
        );

        Ok(Self::new(
            resolver,
            Duration::from_secs(ttl_secs),
            config.freshness,
        ))
    }

    pub fn default_language(&self) -> &str {
        self.resolver.default_language()
    }

    /// Today's reading in `language`, from cache when fresh.
    ///
    /// A failed resolution is returned as-is and never cached.
    pub async fn resolve(&self, language: &str) -> Result<GospelRecord> {
        if !is_valid_language_code(language) {
            return Err(GospelError::InvalidLanguage(language.to_string()));
        }

        self.cache
            .get_or_resolve(language, |language| async move {
                info!("Fetching new data for language: {}", language);
                self.resolver.resolve(&language).await
            })
            .await
    }

    pub async fn stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    pub fn cache_ttl(&self) -> Duration {
        self.cache.ttl()
    }
}
