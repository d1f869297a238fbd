//! Chat command dispatch

use std::sync::Arc;

use tracing::{error, instrument};

use super::BotCommand;
use crate::format::{chat_message, languages_message};
use crate::service::GospelService;

/// Reply sent when the reading cannot be retrieved.
pub const APOLOGY_MESSAGE: &str =
    "Sorry, I encountered an error while fetching the gospel reading. Please try again later.";

/// Answers chat messages using a gospel service.
#[derive(Clone)]
pub struct ChatBot {
    service: Arc<GospelService>,
}

impl ChatBot {
    pub fn new(service: Arc<GospelService>) -> Self {
        Self { service }
    }

    /// Replies to one incoming message, in the order they should be sent.
    ///
    /// Messages that are not commands get no reply.
    #[instrument(skip(self))]
    pub async fn handle(&self, message: &str) -> Vec<String> {
        match BotCommand::parse(message) {
            Some(BotCommand::Gospel(language)) => {
                let language =
                    language.unwrap_or_else(|| self.service.default_language().to_string());
                self.gospel_replies(&language).await
            }
            Some(BotCommand::Languages) => vec![languages_message()],
            None => Vec::new(),
        }
    }

    async fn gospel_replies(&self, language: &str) -> Vec<String> {
        let progress = format!("⏳ Fetching today's gospel in {}...", language);

        let answer = match self.service.resolve(language).await {
            Ok(record) => chat_message(&record),
            Err(e) => {
                error!(error = %e, "Error handling gospel command");
                APOLOGY_MESSAGE.to_string()
            }
        };

        vec![progress, answer]
    }
}
