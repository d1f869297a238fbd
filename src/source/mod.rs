//! Source Module
//!
//! Retrieves the daily reading page and scrapes its four content regions.

mod dom;
mod fetcher;

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::GospelContent;

pub use dom::{class_text, paragraphs_in_class, parse_html};
pub use fetcher::{extract_content, VaticanNewsFetcher};

/// Class of the element holding the article title.
pub const TITLE_CLASS: &str = "title-article";
/// Class of the element holding the article date.
pub const DATE_CLASS: &str = "date-article";
/// Class of the element holding the scripture citation.
pub const SCRIPTURE_CLASS: &str = "scripture-passage";
/// Class of the container whose `<p>` children form the body.
pub const BODY_CLASS: &str = "article-body";

/// Provider of today's reading in the source language.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetches and scrapes the page. All four fields or an error.
    async fn fetch_today(&self) -> Result<GospelContent, FetchError>;
}
