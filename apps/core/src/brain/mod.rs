//! # Brain Module
//!
//! Request-scoped keyword analysis pipeline.
//!
//! ## Components
//! - `normalizer`: Canonical plain-text form of raw submissions
//! - `language`: English/Russian detection by script counting
//! - `keywords`: YAKE-backed keyword extraction
//! - `cleaner`: Noise filtering and case-insensitive dedup
//! - `analyzer`: Main orchestrator

pub mod analyzer;
pub mod cleaner;
pub mod keywords;
pub mod language;
pub mod normalizer;

// Re-export main types for convenience
pub use analyzer::KeywordAnalyzer;
pub use cleaner::clean;
pub use keywords::{extract, KeywordOracle, ScoredTerm, YakeOracle};
pub use language::{detect, Language};
pub use normalizer::normalize;
