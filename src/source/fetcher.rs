//! Daily reading page fetcher

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, instrument};

use super::dom::{class_text, paragraphs_in_class, parse_html};
use super::{ContentSource, BODY_CLASS, DATE_CLASS, SCRIPTURE_CLASS, TITLE_CLASS};
use crate::error::FetchError;
use crate::models::GospelContent;

/// Scrapes the reading from a single fixed page.
#[derive(Debug, Clone)]
pub struct VaticanNewsFetcher {
    client: Client,
    url: String,
}

impl VaticanNewsFetcher {
    /// Creates a fetcher for `url` sharing an existing HTTP client.
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl ContentSource for VaticanNewsFetcher {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_today(&self) -> Result<GospelContent, FetchError> {
        debug!("Fetching daily reading page");

        let html = self
            .client
            .get(&self.url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                error!(error = %e, "Failed to fetch daily reading page");
                FetchError::from(e)
            })?
            .text()
            .await?;

        debug!(bytes = html.len(), "Received daily reading page");
        extract_content(&html)
    }
}

/// Scrapes title, date, scripture and body out of the page markup.
///
/// Body paragraphs are trimmed and joined by a blank line. Any empty region
/// fails the whole extraction.
pub fn extract_content(html: &str) -> Result<GospelContent, FetchError> {
    let document = parse_html(html);

    let title = required(class_text(&document, TITLE_CLASS), "title")?;
    let date = required(class_text(&document, DATE_CLASS), "date")?;
    let scripture = required(class_text(&document, SCRIPTURE_CLASS), "scripture")?;
    let text = required(
        paragraphs_in_class(&document, BODY_CLASS).join("\n\n"),
        "body text",
    )?;

    Ok(GospelContent {
        title,
        date,
        scripture,
        text,
    })
}

fn required(value: String, field: &'static str) -> Result<String, FetchError> {
    if value.is_empty() {
        Err(FetchError::MissingField(field))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <h2 class="title-article">Gospel of the Day</h2>
        <span class="date-article">2024-05-01</span>
        <div class="scripture-passage"> John 14:27 </div>
        <section class="article-body">
            <p>Jesus said to his disciples:</p>
            <p> "Peace I leave with you." </p>
        </section>
    </body></html>"#;

    #[test]
    fn test_extract_content() {
        let content = extract_content(PAGE).unwrap();

        assert_eq!(content.title, "Gospel of the Day");
        assert_eq!(content.date, "2024-05-01");
        assert_eq!(content.scripture, "John 14:27");
        assert_eq!(
            content.text,
            "Jesus said to his disciples:\n\n\"Peace I leave with you.\""
        );
    }

    #[test]
    fn test_extract_content_missing_scripture() {
        let page = PAGE.replace("scripture-passage", "something-else");
        let err = extract_content(&page).unwrap_err();
        assert!(matches!(err, FetchError::MissingField("scripture")));
    }

    #[test]
    fn test_extract_content_without_paragraphs() {
        let page = r#"<div class="title-article">T</div>
            <div class="date-article">D</div>
            <div class="scripture-passage">S</div>
            <div class="article-body">no paragraphs here</div>"#;
        let err = extract_content(page).unwrap_err();
        assert!(matches!(err, FetchError::MissingField("body text")));
    }

    #[test]
    fn test_extract_content_from_garbage() {
        let err = extract_content("not html at all").unwrap_err();
        assert!(matches!(err, FetchError::MissingField("title")));
    }
}
