//! Spell-correction result shape and the learned-model seam.

use std::fmt::Debug;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::DomainError;

/// Confidence reported by the model-based strategy.
pub const MODEL_CONFIDENCE: f64 = 0.85;

/// Confidence reported by the rule-based fallback strategy.
pub const RULE_CONFIDENCE: f64 = 0.75;

/// A detected misspelling. `position` is the zero-based index of the
/// whitespace-delimited word containing the match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellIssue {
    pub word: String,
    pub position: usize,
    pub suggestion: String,
}

/// A substitution suggestion with a 5-word context window centered on the
/// matched word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellSuggestion {
    pub original: String,
    pub corrected: String,
    pub context: String,
}

/// Uniform correction result. Both strategies produce this exact shape;
/// callers can only tell which path ran by the confidence value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpellCheckResult {
    pub corrected_text: String,
    pub errors: Vec<SpellIssue>,
    pub suggestions: Vec<SpellSuggestion>,
    pub confidence: f64,
}

impl SpellCheckResult {
    /// A result that leaves the text unchanged.
    pub fn unchanged(text: impl Into<String>, confidence: f64) -> Self {
        Self {
            corrected_text: text.into(),
            errors: Vec::new(),
            suggestions: Vec::new(),
            confidence,
        }
    }
}

/// The learned correction strategy (tokenizer + classification head behind
/// the backend). Materialized at most once per process.
#[async_trait]
pub trait SpellModel: Send + Sync + Debug {
    async fn correct(&self, text: &str) -> Result<SpellCheckResult, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_wire_shape() {
        let result = SpellCheckResult {
            corrected_text: "អ្វីទេ".to_string(),
            errors: vec![SpellIssue {
                word: "អី".to_string(),
                position: 0,
                suggestion: "អ្វី".to_string(),
            }],
            suggestions: vec![SpellSuggestion {
                original: "អីទេ".to_string(),
                corrected: "អ្វីទេ".to_string(),
                context: "អីទេ".to_string(),
            }],
            confidence: RULE_CONFIDENCE,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["corrected_text"], "អ្វីទេ");
        assert_eq!(json["errors"][0]["word"], "អី");
        assert_eq!(json["errors"][0]["position"], 0);
        assert_eq!(json["errors"][0]["suggestion"], "អ្វី");
        assert_eq!(json["confidence"], 0.75);
    }

    #[test]
    fn test_unchanged_result() {
        let result = SpellCheckResult::unchanged("text", MODEL_CONFIDENCE);
        assert_eq!(result.corrected_text, "text");
        assert!(result.errors.is_empty());
        assert!(result.suggestions.is_empty());
    }
}
