//! Summarization outcomes and Khmer post-processing.

use serde::Serialize;

/// Khmer sentence terminator (khan). Decoded summaries are cut after the
/// last occurrence so a truncated beam does not leak a dangling clause.
pub const SENTENCE_TERMINATOR: char = '។';

/// Shown when decoding produced nothing usable.
pub const EMPTY_SUMMARY_PLACEHOLDER: &str = "មិនអាចសង្ខេបបានទេ។";

/// Prefix for in-band failure messages.
pub const ERROR_PREFIX: &str = "កំហុស៖";

/// Per-model summarization outcome. Failure stays type-distinguishable from
/// success inside the core; both serialize to the same wire shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryOutcome {
    Summarized(String),
    Failed(String),
}

impl SummaryOutcome {
    /// In-band failure carrying the localized message.
    pub fn failure(cause: impl std::fmt::Display) -> Self {
        Self::Failed(format!("{} {}", ERROR_PREFIX, cause))
    }

    /// Wire projection: always a string, never null.
    pub fn as_text(&self) -> &str {
        match self {
            Self::Summarized(text) | Self::Failed(text) => text,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// One entry of a fan-out result, keyed by model key on the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSummary {
    pub display_name: String,
    pub outcome: SummaryOutcome,
}

impl Serialize for ModelSummary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("ModelSummary", 2)?;
        state.serialize_field("name", &self.display_name)?;
        state.serialize_field("summary", self.outcome.as_text())?;
        state.end()
    }
}

/// Strip the decoded summary and cut everything after the last sentence
/// terminator. An empty result becomes the fixed placeholder instead of
/// silent emptiness.
pub fn tidy_summary(decoded: &str) -> String {
    let mut summary = decoded.trim().to_string();

    if let Some(idx) = summary.rfind(SENTENCE_TERMINATOR) {
        summary.truncate(idx + SENTENCE_TERMINATOR.len_utf8());
    }

    let summary = summary.trim();
    if summary.is_empty() {
        EMPTY_SUMMARY_PLACEHOLDER.to_string()
    } else {
        summary.to_string()
    }
}
