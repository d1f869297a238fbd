//! Gospel records
//!
//! The unit of data produced by one resolution and held in the cache.

use serde::Serialize;

/// The four scraped regions of the daily reading page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GospelContent {
    /// Article title
    pub title: String,
    /// Article date as published
    pub date: String,
    /// Scripture citation, e.g. "John 14:27"
    pub scripture: String,
    /// Body paragraphs separated by a blank line
    pub text: String,
}

impl GospelContent {
    /// Creates a new GospelContent
    pub fn new(
        title: impl Into<String>,
        date: impl Into<String>,
        scripture: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            scripture: scripture.into(),
            text: text.into(),
        }
    }
}

/// A resolved reading in its source language and the requested language.
///
/// `translated.date` always equals `original.date`. For the default language
/// `translated` is a verbatim copy of `original`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GospelRecord {
    /// Requested language code
    pub language: String,
    /// Content in the source language
    pub original: GospelContent,
    /// Content in the requested language
    pub translated: GospelContent,
}

impl GospelRecord {
    /// Builds a record for the source language: no translation involved.
    pub fn untranslated(language: impl Into<String>, original: GospelContent) -> Self {
        Self {
            language: language.into(),
            translated: original.clone(),
            original,
        }
    }

    /// The content to show a reader of `language`.
    pub fn content(&self) -> &GospelContent {
        &self.translated
    }

    /// Publication date, never translated.
    pub fn date(&self) -> &str {
        &self.original.date
    }
}
