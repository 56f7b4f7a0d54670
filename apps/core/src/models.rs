use serde::{Deserialize, Serialize};

use crate::brain::Language;

/// Number of keywords returned when the request does not ask for a count.
pub const DEFAULT_MAX_KEYWORDS: i64 = 8;

/// Separator used to render `keywords_str`.
pub const KEYWORD_SEPARATOR: &str = ", ";

fn default_max_keywords() -> i64 {
    DEFAULT_MAX_KEYWORDS
}

/// Body of `POST /keywords`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRequest {
    pub text: String,
    /// Requested keyword count; zero or negative yields an empty list.
    #[serde(default = "default_max_keywords")]
    pub max_keywords: i64,
}

impl KeywordRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            max_keywords: DEFAULT_MAX_KEYWORDS,
        }
    }

    pub fn with_max_keywords(mut self, max_keywords: i64) -> Self {
        self.max_keywords = max_keywords;
        self
    }
}

/// Body returned by `POST /keywords`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordResponse {
    pub language: Language,
    pub keywords: Vec<String>,
    /// `keywords` joined with [`KEYWORD_SEPARATOR`]
    pub keywords_str: String,
}

impl KeywordResponse {
    /// Build a response; `keywords_str` is always derived from `keywords`.
    pub fn new(language: Language, keywords: Vec<String>) -> Self {
        let keywords_str = keywords.join(KEYWORD_SEPARATOR);
        Self {
            language,
            keywords,
            keywords_str,
        }
    }

    /// Response for text with nothing to analyze.
    pub fn unknown() -> Self {
        Self::new(Language::Unknown, Vec::new())
    }
}

/// Body returned by `GET /health`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_default_max_keywords() {
        let req: KeywordRequest = serde_json::from_str(r#"{"text": "hello"}"#).unwrap();
        assert_eq!(req.text, "hello");
        assert_eq!(req.max_keywords, DEFAULT_MAX_KEYWORDS);
    }

    #[test]
    fn test_request_rejects_wrong_types() {
        for body in [
            r#"{"text": 42}"#,
            r#"{"text": "a", "max_keywords": "x"}"#,
            r#"{"text": "a", "max_keywords": 1.5}"#,
        ] {
            assert!(
                serde_json::from_str::<KeywordRequest>(body).is_err(),
                "accepted {}",
                body
            );
        }
    }

    #[test]
    fn test_request_accepts_negative_count() {
        let req: KeywordRequest =
            serde_json::from_str(r#"{"text": "a", "max_keywords": -1}"#).unwrap();
        assert_eq!(req.max_keywords, -1);
    }

    #[test]
    fn test_response_joins_keywords() {
        let resp = KeywordResponse::new(
            Language::English,
            vec!["memory".to_string(), "safety".to_string()],
        );
        assert_eq!(resp.keywords_str, "memory, safety");
    }

    #[test]
    fn test_unknown_response_shape() {
        let value = serde_json::to_value(KeywordResponse::unknown()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"language": "unknown", "keywords": [], "keywords_str": ""})
        );
    }
}
