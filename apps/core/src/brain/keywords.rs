//! Keyword Extraction using YAKE.
//!
//! YAKE is an unsupervised statistical extractor; it is used here as an
//! opaque ranking oracle. This module only configures it (unigrams, near
//! duplicate suppression at 0.9, per-language stopwords) and turns its
//! ranked output into plain terms.

use std::collections::HashMap;

use tracing::{debug, warn};
use yake_rust::{get_n_best, Config, StopWords};

use super::language::Language;
use crate::error::AppError;

/// Languages the oracle is expected to serve.
pub const SUPPORTED_LANGUAGES: [Language; 2] = [Language::English, Language::Russian];

/// Maximum n-gram size requested from YAKE.
const NGRAM_SIZE: usize = 1;

/// YAKE's own near-duplicate suppression threshold.
const DEDUP_THRESHOLD: f64 = 0.9;

/// A candidate term as ranked by the oracle.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredTerm {
    /// Surface form of the term as it appears in the text
    pub term: String,
    /// Oracle score (lower = more relevant for YAKE)
    pub score: f64,
}

/// Ranking oracle for candidate keywords.
///
/// Implementations return at most `top` terms, most relevant first.
pub trait KeywordOracle: Send + Sync + 'static {
    fn rank(
        &self,
        text: &str,
        language: Language,
        top: usize,
    ) -> Result<Vec<ScoredTerm>, AppError>;
}

/// Production oracle backed by `yake-rust`.
///
/// Stopword lists are loaded once and shared read-only across requests.
pub struct YakeOracle {
    config: Config,
    stopwords: HashMap<Language, StopWords>,
}

impl Default for YakeOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl YakeOracle {
    /// Create an oracle with stopwords for every supported language.
    pub fn new() -> Self {
        let mut stopwords = HashMap::new();
        for language in SUPPORTED_LANGUAGES {
            match StopWords::predefined(language.code()) {
                Some(list) => {
                    stopwords.insert(language, list);
                }
                None => warn!(language = %language, "no YAKE stopword list available"),
            }
        }

        let config = Config {
            ngrams: NGRAM_SIZE,
            remove_duplicates: true,
            deduplication_threshold: DEDUP_THRESHOLD,
            ..Config::default()
        };

        Self { config, stopwords }
    }
}

impl KeywordOracle for YakeOracle {
    fn rank(
        &self,
        text: &str,
        language: Language,
        top: usize,
    ) -> Result<Vec<ScoredTerm>, AppError> {
        let stopwords = self.stopwords.get(&language).ok_or_else(|| {
            AppError::Extraction(format!("no stopword list for language '{}'", language))
        })?;

        let results = get_n_best(top, text, stopwords, &self.config);

        Ok(results
            .into_iter()
            .map(|item| ScoredTerm {
                term: item.raw,
                score: item.score,
            })
            .collect())
    }
}

/// Ask the oracle for the `max_keywords` best single-word terms.
///
/// The oracle's order is kept as the relevance ranking; scores are dropped.
pub fn extract(
    oracle: &dyn KeywordOracle,
    text: &str,
    language: Language,
    max_keywords: usize,
) -> Result<Vec<String>, AppError> {
    if max_keywords == 0 {
        return Ok(Vec::new());
    }

    let ranked = oracle.rank(text, language, max_keywords)?;
    debug!(
        language = %language,
        candidates = ranked.len(),
        best_score = ?ranked.first().map(|scored| scored.score),
        "oracle ranked terms"
    );

    Ok(ranked.into_iter().map(|scored| scored.term).collect())
}
