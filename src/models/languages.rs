//! Language codes
//!
//! The advertised list of common languages and language-code validation.

use serde::Serialize;

/// A language the translation provider is known to support.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

/// Commonly requested languages. Any code the provider accepts also works.
pub const COMMON_LANGUAGES: &[Language] = &[
    Language { code: "en", name: "English" },
    Language { code: "es", name: "Spanish" },
    Language { code: "fr", name: "French" },
    Language { code: "it", name: "Italian" },
    Language { code: "de", name: "German" },
    Language { code: "pt", name: "Portuguese" },
    Language { code: "si", name: "Sinhala" },
    Language { code: "ru", name: "Russian" },
    Language { code: "ar", name: "Arabic" },
    Language { code: "hi", name: "Hindi" },
    Language { code: "bn", name: "Bengali" },
    Language { code: "zh", name: "Chinese" },
    Language { code: "ja", name: "Japanese" },
    Language { code: "ko", name: "Korean" },
];

/// Checks that `code` looks like a language tag: one or two ASCII alphabetic
/// subtags of 2 to 8 letters joined by `-` (`es`, `haw`, `zh-CN`).
pub fn is_valid_language_code(code: &str) -> bool {
    let subtags: Vec<&str> = code.split('-').collect();
    subtags.len() <= 2
        && subtags
            .iter()
            .all(|s| (2..=8).contains(&s.len()) && s.chars().all(|c| c.is_ascii_alphabetic()))
}
