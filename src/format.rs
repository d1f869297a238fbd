//! Text renderings of a gospel record for the delivery surfaces.

use crate::models::{GospelRecord, COMMON_LANGUAGES};

/// Plain-text rendering: title, date, scripture and body separated by blank lines.
pub fn plain_text(record: &GospelRecord) -> String {
    let content = record.content();
    format!(
        "{}\n\n{}\n\n{}\n\n{}",
        content.title,
        record.date(),
        content.scripture,
        content.text
    )
}

/// Chat rendering with bold title and date/book markers.
pub fn chat_message(record: &GospelRecord) -> String {
    let content = record.content();
    format!(
        "*{}*\n\n📅 {}\n\n📖 {}\n\n{}",
        content.title,
        record.date(),
        content.scripture,
        content.text
    )
}

/// Chat listing of the common language codes.
pub fn languages_message() -> String {
    let mut message = String::from("*Supported Languages*\n\n");
    for language in COMMON_LANGUAGES {
        message.push_str(&format!("{} - {}\n", language.code, language.name));
    }
    message.push_str("\nAnd many more! Try with any language code.");
    message
}
