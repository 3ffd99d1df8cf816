//! Model identity: specs, families, and the built-in registry table.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::DomainError;

/// Architecture / loading-strategy selector for a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFamily {
    Mbart,
    Mt5,
    Spellcheck,
}

impl fmt::Display for ModelFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mbart => write!(f, "mbart"),
            Self::Mt5 => write!(f, "mt5"),
            Self::Spellcheck => write!(f, "spellcheck"),
        }
    }
}

impl FromStr for ModelFamily {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mbart" => Ok(Self::Mbart),
            "mt5" => Ok(Self::Mt5),
            "spellcheck" => Ok(Self::Spellcheck),
            other => Err(DomainError::unknown_family(other)),
        }
    }
}

/// Static declaration of an available model: identity, backing artifact
/// location, and the family that selects its loading strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSpec {
    pub key: String,
    pub display_name: String,
    pub source_locator: String,
    pub family: ModelFamily,
}

impl ModelSpec {
    pub fn new(
        key: impl Into<String>,
        display_name: impl Into<String>,
        source_locator: impl Into<String>,
        family: ModelFamily,
    ) -> Self {
        Self {
            key: key.into(),
            display_name: display_name.into(),
            source_locator: source_locator.into(),
            family,
        }
    }
}

/// Shared base checkpoint composed with per-model adapters for the mbart family.
pub const MBART_BASE_REPO: &str = "facebook/mbart-large-50";

/// Locale tags the mbart tokenizer is fixed to.
pub const MBART_SRC_LANG: &str = "km_KH";
pub const MBART_TGT_LANG: &str = "km_KH";

/// The summarization models served by default.
pub fn builtin_specs() -> Vec<ModelSpec> {
    vec![
        ModelSpec::new(
            "model1",
            "Model 1 - Khmer MBart Summarization",
            "sedtha/mBart-50-large_LoRa_kh_sumerize",
            ModelFamily::Mbart,
        ),
        ModelSpec::new(
            "model2",
            "Model 2 - Khmer mT5 Summarization",
            "angkor96/khmer-mT5-news-summarization",
            ModelFamily::Mt5,
        ),
    ]
}

/// The single spell-check slot; lives outside the summarization table.
pub fn spellcheck_spec() -> ModelSpec {
    ModelSpec::new(
        "spellcheck",
        "Khmer Spell Checker",
        "akara/khmer-spellcheck",
        ModelFamily::Spellcheck,
    )
}
