//! Gospel Resolver
//!
//! Produces a fresh [`GospelRecord`]: one page fetch, then up to three
//! sequential translations.

use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::error::{GospelError, Result};
use crate::models::{GospelContent, GospelRecord};
use crate::source::ContentSource;
use crate::translate::Translator;

/// Combines a content source and a translator into dual-language records.
#[derive(Clone)]
pub struct GospelResolver {
    source: Arc<dyn ContentSource>,
    translator: Arc<dyn Translator>,
    default_language: String,
}

impl GospelResolver {
    /// Creates a resolver. `default_language` is the language the source
    /// publishes in; requests for it make no translation calls.
    pub fn new(
        source: Arc<dyn ContentSource>,
        translator: Arc<dyn Translator>,
        default_language: impl Into<String>,
    ) -> Self {
        Self {
            source,
            translator,
            default_language: default_language.into(),
        }
    }

    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Fetches today's reading and translates it into `language`.
    ///
    /// Fails only when the fetch fails. Translation failures leave the
    /// affected field in the source language.
    #[instrument(skip(self))]
    pub async fn resolve(&self, language: &str) -> Result<GospelRecord> {
        let original = self.source.fetch_today().await.map_err(|source| {
            error!(error = %source, "Failed to fetch gospel");
            GospelError::Resolution {
                language: language.to_string(),
                source,
            }
        })?;

        if language == self.default_language {
            return Ok(GospelRecord::untranslated(language, original));
        }

        info!("Translating gospel");
        let translated = GospelContent {
            title: self.translator.translate(&original.title, language).await,
            date: original.date.clone(),
            scripture: self.translator.translate(&original.scripture, language).await,
            text: self.translator.translate(&original.text, language).await,
        };

        Ok(GospelRecord {
            language: language.to_string(),
            original,
            translated,
        })
    }
}
