//! Core domain types: model identity, generation seams, summarization
//! outcomes, and spell-correction results.

pub mod error;
pub mod generation;
pub mod model;
pub mod spell;
pub mod summary;

pub use error::DomainError;
pub use generation::{
    GenerationParams, Seq2SeqModel, SummarizerHandle, TextTokenizer, MAX_INPUT_TOKENS,
};
pub use model::{builtin_specs, spellcheck_spec, ModelFamily, ModelSpec};
pub use spell::{SpellCheckResult, SpellIssue, SpellModel, SpellSuggestion};
pub use summary::{tidy_summary, ModelSummary, SummaryOutcome};
