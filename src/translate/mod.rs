//! Translation Module
//!
//! Best-effort machine translation. A translator never fails: on any error
//! it hands back the text it was given.

mod google;

use async_trait::async_trait;

pub use google::{join_segments, GoogleTranslator};

/// Translates a single string into a target language.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Returns the translation of `text`, or `text` unchanged on failure.
    async fn translate(&self, text: &str, target_language: &str) -> String;
}
