//! Language detection by script counting.
//!
//! Only two families are supported: Cyrillic-dominant text is Russian,
//! everything else is English.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Minimum number of Cyrillic letters before text may be classified as Russian.
/// Keeps short Latin text with a transliterated name or two out of `ru`.
pub const MIN_CYRILLIC_LETTERS: usize = 20;

/// Detected language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ru")]
    Russian,
    /// Only produced for text that is empty after normalization.
    #[serde(rename = "unknown")]
    Unknown,
}

impl Language {
    /// Returns the language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
            Language::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

fn is_cyrillic_letter(c: char) -> bool {
    matches!(c, 'А'..='я' | 'Ё' | 'ё')
}

/// Classify non-empty normalized text as English or Russian.
///
/// Russian wins only when Cyrillic letters reach [`MIN_CYRILLIC_LETTERS`]
/// and are at least as numerous as basic Latin letters.
pub fn detect(text: &str) -> Language {
    let (cyr, lat) = text.chars().fold((0usize, 0usize), |(cyr, lat), c| {
        if is_cyrillic_letter(c) {
            (cyr + 1, lat)
        } else if c.is_ascii_alphabetic() {
            (cyr, lat + 1)
        } else {
            (cyr, lat)
        }
    });

    if cyr >= MIN_CYRILLIC_LETTERS.max(lat) {
        Language::Russian
    } else {
        Language::English
    }
}
