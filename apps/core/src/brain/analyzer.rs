//! Keyword Analyzer - composes the Brain pipeline for one request.
//!
//! normalize -> detect -> extract -> clean, with two short-circuits that
//! answer `unknown` without touching the oracle:
//! 1. raw text is empty or whitespace only
//! 2. text is empty after normalization

use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::cleaner::clean;
use super::keywords::{extract, KeywordOracle, YakeOracle};
use super::language::detect;
use super::normalizer::normalize;
use crate::error::AppError;
use crate::models::{KeywordRequest, KeywordResponse};

/// Main analyzer that orchestrates all pipeline components
#[derive(Clone)]
pub struct KeywordAnalyzer {
    oracle: Arc<dyn KeywordOracle>,
}

impl Default for KeywordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordAnalyzer {
    /// Create an analyzer backed by YAKE
    pub fn new() -> Self {
        Self::with_oracle(Arc::new(YakeOracle::new()))
    }

    /// Create an analyzer with a custom ranking oracle
    pub fn with_oracle(oracle: Arc<dyn KeywordOracle>) -> Self {
        Self { oracle }
    }

    /// Analyze a request and produce the response payload
    pub fn analyze(&self, request: &KeywordRequest) -> Result<KeywordResponse, AppError> {
        let start = Instant::now();

        let raw = request.text.trim();
        if raw.is_empty() {
            debug!("empty input, skipping analysis");
            return Ok(KeywordResponse::unknown());
        }

        let text = normalize(raw);
        if text.is_empty() {
            debug!("input empty after normalization");
            return Ok(KeywordResponse::unknown());
        }

        let language = detect(&text);
        // Non-positive counts take the empty-list path in `extract`.
        let top = usize::try_from(request.max_keywords).unwrap_or(0);
        let terms = extract(self.oracle.as_ref(), &text, language, top)?;
        let keywords = clean(terms);

        info!(
            language = %language,
            keywords = keywords.len(),
            chars = text.chars().count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "extracted keywords"
        );

        Ok(KeywordResponse::new(language, keywords))
    }
}
