//! Model-based correction strategy.
//!
//! Detects known errors at substring level over the whole text and
//! substitutes them, reporting the containing word's index. The lexicon is
//! supplied by the backend when the model is materialized.

use async_trait::async_trait;

use crate::domain::spell::{
    SpellCheckResult, SpellIssue, SpellModel, SpellSuggestion, MODEL_CONFIDENCE,
};
use crate::domain::DomainError;

#[derive(Debug)]
pub struct KnownErrorClassifier {
    pairs: Vec<(String, String)>,
}

impl KnownErrorClassifier {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }
}

#[async_trait]
impl SpellModel for KnownErrorClassifier {
    async fn correct(&self, text: &str) -> Result<SpellCheckResult, DomainError> {
        let mut corrected = text.to_string();
        let mut errors = Vec::new();
        let mut suggestions = Vec::new();

        for (wrong, right) in &self.pairs {
            if let Some(byte_idx) = corrected.find(wrong.as_str()) {
                let position = word_index_at(&corrected, byte_idx);
                let words: Vec<&str> = corrected.split_whitespace().collect();
                let original_word = words.get(position).copied().unwrap_or(wrong).to_string();

                let replaced_word = original_word.replace(wrong.as_str(), right);
                errors.push(SpellIssue {
                    word: wrong.clone(),
                    position,
                    suggestion: right.clone(),
                });
                suggestions.push(SpellSuggestion {
                    original: original_word,
                    corrected: replaced_word,
                    context: context_window(&words, position),
                });

                corrected = corrected.replace(wrong.as_str(), right);
            }
        }

        Ok(SpellCheckResult {
            corrected_text: corrected,
            errors,
            suggestions,
            confidence: MODEL_CONFIDENCE,
        })
    }
}

/// Zero-based index of the whitespace-delimited word containing `byte_idx`.
fn word_index_at(text: &str, byte_idx: usize) -> usize {
    let prefix = &text[..byte_idx];
    let completed = prefix.split_whitespace().count();

    if prefix.ends_with(char::is_whitespace) || prefix.is_empty() {
        completed
    } else {
        completed.saturating_sub(1)
    }
}

fn context_window(words: &[&str], index: usize) -> String {
    let start = index.saturating_sub(2);
    let end = (index + 3).min(words.len());
    if start >= end {
        return String::new();
    }
    words[start..end].join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> KnownErrorClassifier {
        KnownErrorClassifier::new(vec![
            ("អី".to_string(), "អ្វី".to_string()),
            ("ខ្នុំ".to_string(), "ខ្ញុំ".to_string()),
        ])
    }

    #[tokio::test]
    async fn test_substring_detection_and_substitution() {
        let result = classifier().correct("អីទេ").await.unwrap();

        assert_eq!(result.corrected_text, "អ្វីទេ");
        assert_eq!(result.confidence, MODEL_CONFIDENCE);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].word, "អី");
        assert_eq!(result.errors[0].position, 0);
    }

    #[tokio::test]
    async fn test_match_in_later_word() {
        let result = classifier().correct("កម្ពុជា ខ្នុំ").await.unwrap();

        assert_eq!(result.corrected_text, "កម្ពុជា ខ្ញុំ");
        assert_eq!(result.errors[0].position, 1);
        assert_eq!(result.suggestions[0].original, "ខ្នុំ");
        assert_eq!(result.suggestions[0].corrected, "ខ្ញុំ");
    }

    #[tokio::test]
    async fn test_clean_text_passes_through() {
        let result = classifier().correct("ប្រទេស").await.unwrap();

        assert_eq!(result.corrected_text, "ប្រទេស");
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_word_index_at() {
        let text = "ab cd ef";
        assert_eq!(word_index_at(text, 0), 0);
        assert_eq!(word_index_at(text, 1), 0);
        assert_eq!(word_index_at(text, 3), 1);
        assert_eq!(word_index_at(text, 6), 2);
    }
}
