//! Rule-based correction: a static table of known Khmer misspellings.

use once_cell::sync::Lazy;

use crate::domain::spell::{SpellCheckResult, SpellIssue, SpellSuggestion, RULE_CONFIDENCE};

/// Known misspelling -> correction, in scan order. Some entries map to
/// themselves; they still count as detected errors (kept as-is from the
/// shipped dictionary).
static CORRECTIONS: Lazy<Vec<(&'static str, &'static str)>> = Lazy::new(|| {
    vec![
        ("អី", "អ្វី"),
        ("ចង់", "ចង់"),
        ("ខ្នុំ", "ខ្ញុំ"),
        ("អគុណ", "អរគុណ"),
        ("សូស្តី", "សួស្តី"),
        ("ធ្វី", "ធ្វើ"),
    ]
});

/// The dictionary as owned pairs, e.g. to seed a classifier.
pub fn correction_pairs() -> Vec<(String, String)> {
    CORRECTIONS
        .iter()
        .map(|(w, r)| (w.to_string(), r.to_string()))
        .collect()
}

/// Scan the text word by word (whitespace-delimited) against the dictionary
/// and substitute matches in place. Rebuilds the text from the corrected
/// words; whitespace is normalized to single spaces.
pub fn correct(text: &str) -> SpellCheckResult {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut corrected_words: Vec<String> = Vec::with_capacity(words.len());
    let mut errors = Vec::new();
    let mut suggestions = Vec::new();

    for (index, original) in words.iter().enumerate() {
        let mut current = (*original).to_string();

        for (wrong, right) in CORRECTIONS.iter() {
            if current.contains(wrong) {
                let replaced = current.replace(wrong, right);

                errors.push(SpellIssue {
                    word: (*wrong).to_string(),
                    position: index,
                    suggestion: (*right).to_string(),
                });
                suggestions.push(SpellSuggestion {
                    original: (*original).to_string(),
                    corrected: replaced.clone(),
                    context: context_window(&words, index),
                });

                current = replaced;
            }
        }

        corrected_words.push(current);
    }

    SpellCheckResult {
        corrected_text: corrected_words.join(" "),
        errors,
        suggestions,
        confidence: RULE_CONFIDENCE,
    }
}

/// 5-word window centered on the matched word.
fn context_window(words: &[&str], index: usize) -> String {
    let start = index.saturating_sub(2);
    let end = (index + 3).min(words.len());
    words[start..end].join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_error_inside_a_word() {
        let result = correct("អីទេ");

        assert_eq!(result.corrected_text, "អ្វីទេ");
        assert_eq!(result.confidence, RULE_CONFIDENCE);
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].word, "អី");
        assert_eq!(result.errors[0].position, 0);
        assert_eq!(result.errors[0].suggestion, "អ្វី");
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.suggestions[0].original, "អីទេ");
        assert_eq!(result.suggestions[0].corrected, "អ្វីទេ");
    }

    #[test]
    fn test_self_mapping_entry_is_still_counted() {
        let result = correct("ចង់");

        assert_eq!(result.corrected_text, "ចង់");
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].word, "ចង់");
        assert_eq!(result.errors[0].suggestion, "ចង់");
    }

    #[test]
    fn test_clean_text_has_no_errors() {
        let result = correct("កម្ពុជា ជា ប្រទេស");

        assert_eq!(result.corrected_text, "កម្ពុជា ជា ប្រទេស");
        assert!(result.errors.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_word_positions_are_zero_based() {
        let result = correct("កម្ពុជា អីទេ");

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].position, 1);
        assert_eq!(result.corrected_text, "កម្ពុជា អ្វីទេ");
    }

    #[test]
    fn test_context_window_stays_in_bounds() {
        let words = vec!["a", "b", "c", "d", "e", "f"];

        assert_eq!(context_window(&words, 0), "a b c");
        assert_eq!(context_window(&words, 2), "a b c d e");
        assert_eq!(context_window(&words, 5), "d e f");
    }
}
