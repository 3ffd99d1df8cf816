pub mod error;
pub mod json;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{ModelSummary, SpellIssue, SpellSuggestion};

pub use error::{ApiError, ApiErrorBody};
pub use json::Json;

/// Message returned when a request carries no text to process.
pub const EMPTY_TEXT_MESSAGE: &str = "សូមបញ្ចូលអត្ថបទសិន។";

/// Message carried by the best-effort spell-check fallback body.
pub const SPELL_FAILURE_MESSAGE: &str = "មានបញ្ហាក្នុងការពិនិត្យអក្ខរាវិរុទ្ធ។";

fn default_models() -> Vec<String> {
    vec!["model1".to_string()]
}

/// Request body for the summarization endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub text: String,

    /// Registry keys to fan the text out to. Defaults to the first
    /// built-in model when omitted.
    #[serde(default = "default_models")]
    pub models: Vec<String>,
}

/// Per-model summaries keyed by registry key.
#[derive(Debug, Serialize)]
pub struct SummarizeResponse {
    pub results: BTreeMap<String, ModelSummary>,
}

/// Catalog entry in the `/get_models` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelListing {
    pub name: String,
}

/// Request body for the spell check endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct SpellCheckRequest {
    #[serde(default)]
    pub text: String,
}

/// Response body for the spell check endpoints. Mirrors the pipeline
/// result, plus an optional operator-facing message for degraded runs.
#[derive(Debug, Serialize, Deserialize)]
pub struct SpellCheckResponse {
    pub corrected_text: String,
    pub errors: Vec<SpellIssue>,
    pub suggestions: Vec<SpellSuggestion>,
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
