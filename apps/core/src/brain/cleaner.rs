//! Keyword cleaning: noise filtering followed by case-insensitive dedup.

use std::collections::HashSet;

/// Markup residue that YAKE sometimes ranks highly.
const STOPLIST: &[&str] = &["tex"];

/// Minimum keyword length, in characters.
pub const MIN_KEYWORD_CHARS: usize = 3;

fn is_noise(term: &str) -> bool {
    term.is_empty()
        || STOPLIST.contains(&term.to_lowercase().as_str())
        || term.chars().count() < MIN_KEYWORD_CHARS
}

/// Clean ranked terms.
///
/// Terms are trimmed, noise is dropped, then only the first occurrence of
/// each lowercase form is kept. Ranking order is preserved.
pub fn clean<I, S>(terms: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let filtered: Vec<String> = terms
        .into_iter()
        .map(|term| term.as_ref().trim().to_string())
        .filter(|term| !is_noise(term))
        .collect();

    let mut seen = HashSet::new();
    filtered
        .into_iter()
        .filter(|term| seen.insert(term.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noise_filtered() {
        let out = clean(["tex", "ok", "hi", "Hi", "hello", ""]);
        assert_eq!(out, vec!["hello"]);
    }

    #[test]
    fn test_case_insensitive_dedup_keeps_first() {
        let out = clean(["Apple", "apple", "Banana"]);
        assert_eq!(out, vec!["Apple", "Banana"]);
    }

    #[test]
    fn test_stoplist_is_case_insensitive() {
        assert!(clean(["TeX", " TEX "]).is_empty());
    }

    #[test]
    fn test_terms_are_trimmed() {
        let out = clean(["  memory ", "Memory", "\tsafety"]);
        assert_eq!(out, vec!["memory", "safety"]);
    }

    #[test]
    fn test_length_counted_in_chars() {
        // Two Cyrillic letters are four bytes but still too short.
        let out = clean(["мы", "мир", "Мир"]);
        assert_eq!(out, vec!["мир"]);
    }

    #[test]
    fn test_empty_input() {
        let out = clean(Vec::<String>::new());
        assert!(out.is_empty());
    }
}
