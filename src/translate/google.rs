//! Google Translate client (`translate_a/single` endpoint)

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::Translator;
use crate::error::TranslateError;

/// Client for the segment-list translation endpoint.
#[derive(Debug, Clone)]
pub struct GoogleTranslator {
    client: Client,
    endpoint: String,
    source_language: String,
}

impl GoogleTranslator {
    /// Creates a translator from `source_language` sharing an existing HTTP client.
    pub fn new(
        client: Client,
        endpoint: impl Into<String>,
        source_language: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            source_language: source_language.into(),
        }
    }

    /// One round trip. Errors are reported, not swallowed.
    pub async fn try_translate(
        &self,
        text: &str,
        target_language: &str,
    ) -> Result<String, TranslateError> {
        let body: Value = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("client", "gtx"),
                ("sl", self.source_language.as_str()),
                ("tl", target_language),
                ("dt", "t"),
                ("q", text),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let translated = join_segments(&body)?;
        if translated.is_empty() {
            return Err(TranslateError::Empty);
        }
        Ok(translated)
    }
}

#[async_trait]
impl Translator for GoogleTranslator {
    #[instrument(skip(self, text), fields(chars = text.len()))]
    async fn translate(&self, text: &str, target_language: &str) -> String {
        if text.trim().is_empty() {
            return text.to_string();
        }

        match self.try_translate(text, target_language).await {
            Ok(translated) => {
                debug!("Translation succeeded");
                translated
            }
            Err(e) => {
                warn!(error = %e, "Translation failed, keeping original text");
                text.to_string()
            }
        }
    }
}

/// Concatenates the translated segments of a response, in order.
///
/// The response looks like `[[["Hola", "Hello", ...], ["mundo", "world", ...]], ...]`;
/// the first element of each segment is the translated fragment.
pub fn join_segments(body: &Value) -> Result<String, TranslateError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or(TranslateError::Malformed)?;

    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_join_segments_in_order() {
        let body = json!([[["Hola ", "Hello ", null], ["mundo", "world", null]], null, "en"]);
        assert_eq!(join_segments(&body).unwrap(), "Hola mundo");
    }

    #[test]
    fn test_join_segments_skips_non_text() {
        let body = json!([[["Hola", "Hello"], [null, "x"], []]]);
        assert_eq!(join_segments(&body).unwrap(), "Hola");
    }

    #[test]
    fn test_join_segments_malformed() {
        assert!(matches!(
            join_segments(&json!({"text": "Hola"})),
            Err(TranslateError::Malformed)
        ));
        assert!(matches!(
            join_segments(&json!(["Hola"])),
            Err(TranslateError::Malformed)
        ));
    }

    #[test]
    fn test_join_segments_empty_list() {
        assert_eq!(join_segments(&json!([[]])).unwrap(), "");
    }

    #[tokio::test]
    async fn test_blank_text_skips_network() {
        let translator = GoogleTranslator::new(Client::new(), "http://127.0.0.1:9/", "en");
        assert_eq!(translator.translate("   ", "es").await, "   ");
    }
}
