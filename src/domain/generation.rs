//! Generation seams: the opaque model capability and its fixed decoding
//! parameters per family.

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use super::model::ModelFamily;
use super::DomainError;

/// Input-token budget applied before generation.
pub const MAX_INPUT_TOKENS: usize = 1024;

/// Fixed decoding parameters. Generation is deterministic at fixed
/// parameters (beam search), so repeat calls yield identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationParams {
    pub num_beams: u32,
    pub max_new_tokens: u32,
    pub early_stopping: bool,
}

impl GenerationParams {
    /// Family-specific decoding parameters for the summarization families.
    /// The spellcheck family does not run seq2seq generation.
    pub fn for_family(family: ModelFamily) -> Option<Self> {
        match family {
            ModelFamily::Mbart => Some(Self {
                num_beams: 4,
                max_new_tokens: 125,
                early_stopping: true,
            }),
            ModelFamily::Mt5 => Some(Self {
                num_beams: 5,
                max_new_tokens: 125,
                early_stopping: true,
            }),
            ModelFamily::Spellcheck => None,
        }
    }
}

/// Tokenizer side of a loaded model pair. Only the input budget matters to
/// the dispatcher; encoding internals stay behind this seam.
pub trait TextTokenizer: Send + Sync + Debug {
    /// Truncate `text` to at most `max_tokens` input tokens, returning the
    /// (possibly shortened) text to feed into generation.
    fn truncate(&self, text: &str, max_tokens: usize) -> Result<String, DomainError>;
}

/// The opaque pretrained capability: `generate(input, params) -> text`.
/// Beam search internals are owned by the backing runtime.
#[async_trait]
pub trait Seq2SeqModel: Send + Sync + Debug {
    async fn generate(
        &self,
        input: &str,
        params: &GenerationParams,
    ) -> Result<String, DomainError>;
}

/// A ready (tokenizer, model) pair plus the family's decoding parameters.
/// Owned by the registry; shared read-only once loaded.
#[derive(Debug, Clone)]
pub struct SummarizerHandle {
    pub tokenizer: Arc<dyn TextTokenizer>,
    pub model: Arc<dyn Seq2SeqModel>,
    pub params: GenerationParams,
}

impl SummarizerHandle {
    pub fn new(
        tokenizer: Arc<dyn TextTokenizer>,
        model: Arc<dyn Seq2SeqModel>,
        params: GenerationParams,
    ) -> Self {
        Self {
            tokenizer,
            model,
            params,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_params() {
        let mbart = GenerationParams::for_family(ModelFamily::Mbart).unwrap();
        assert_eq!(mbart.num_beams, 4);
        assert_eq!(mbart.max_new_tokens, 125);
        assert!(mbart.early_stopping);

        let mt5 = GenerationParams::for_family(ModelFamily::Mt5).unwrap();
        assert_eq!(mt5.num_beams, 5);
        assert_eq!(mt5.max_new_tokens, 125);
        assert!(mt5.early_stopping);

        assert!(GenerationParams::for_family(ModelFamily::Spellcheck).is_none());
    }
}
