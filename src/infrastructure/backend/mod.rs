//! Backend seam for materializing models from their specs.

mod hf;
mod http_client;

pub use hf::{HfBackend, HfBackendConfig};
pub use http_client::{HttpClient, HttpClientTrait};

use std::fmt::Debug;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{DomainError, ModelSpec, SpellModel, SummarizerHandle};

/// Constructs ready model instances from specs. Loading is expensive
/// (artifact staging, tokenizer construction) and is only invoked by the
/// registry's lazy path.
#[async_trait]
pub trait ModelBackend: Send + Sync + Debug {
    /// Family-specific construction of a (tokenizer, model) pair for the
    /// summarization families.
    async fn load_summarizer(&self, spec: &ModelSpec) -> Result<SummarizerHandle, DomainError>;

    /// Materialize the learned spell-correction strategy.
    async fn load_spell_checker(
        &self,
        spec: &ModelSpec,
    ) -> Result<Arc<dyn SpellModel>, DomainError>;

    fn backend_name(&self) -> &'static str;
}

#[cfg(test)]
pub mod mock {
    use super::*;

    use std::collections::{HashMap, HashSet};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::domain::{GenerationParams, Seq2SeqModel, TextTokenizer};

    /// Tokenizer stand-in: passes text through untouched unless a budget is
    /// configured smaller than the whitespace token count.
    #[derive(Debug)]
    pub struct MockTokenizer;

    impl TextTokenizer for MockTokenizer {
        fn truncate(&self, text: &str, max_tokens: usize) -> Result<String, DomainError> {
            let words: Vec<&str> = text.split_whitespace().collect();
            if words.len() <= max_tokens {
                Ok(text.to_string())
            } else {
                Ok(words[..max_tokens].join(" "))
            }
        }
    }

    #[derive(Debug)]
    struct MockSeq2Seq {
        output: String,
        fail: bool,
    }

    #[async_trait]
    impl Seq2SeqModel for MockSeq2Seq {
        async fn generate(
            &self,
            _input: &str,
            _params: &GenerationParams,
        ) -> Result<String, DomainError> {
            if self.fail {
                return Err(DomainError::inference("mock", "generation failed"));
            }
            Ok(self.output.clone())
        }
    }

    /// Backend double with per-key canned outputs and failure injection.
    #[derive(Debug, Default)]
    pub struct MockBackend {
        outputs: HashMap<String, String>,
        failing_loads: HashSet<String>,
        failing_generation: HashSet<String>,
        spell_model: Option<Arc<dyn SpellModel>>,
        summarizer_loads: AtomicUsize,
        spell_loads: AtomicUsize,
    }

    impl MockBackend {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_output(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
            self.outputs.insert(key.into(), text.into());
            self
        }

        pub fn with_failing_load(mut self, key: impl Into<String>) -> Self {
            self.failing_loads.insert(key.into());
            self
        }

        pub fn with_failing_generation(mut self, key: impl Into<String>) -> Self {
            self.failing_generation.insert(key.into());
            self
        }

        pub fn with_spell_model(mut self, model: Arc<dyn SpellModel>) -> Self {
            self.spell_model = Some(model);
            self
        }

        pub fn summarizer_loads(&self) -> usize {
            self.summarizer_loads.load(Ordering::SeqCst)
        }

        pub fn spell_loads(&self) -> usize {
            self.spell_loads.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ModelBackend for MockBackend {
        async fn load_summarizer(
            &self,
            spec: &ModelSpec,
        ) -> Result<SummarizerHandle, DomainError> {
            self.summarizer_loads.fetch_add(1, Ordering::SeqCst);

            if self.failing_loads.contains(&spec.key) {
                return Err(DomainError::model_load(&spec.key, "mock load failure"));
            }

            let output = self
                .outputs
                .get(&spec.key)
                .cloned()
                .unwrap_or_else(|| format!("summary from {}", spec.key));

            let params = GenerationParams::for_family(spec.family)
                .ok_or_else(|| DomainError::unknown_family(spec.family.to_string()))?;

            Ok(SummarizerHandle::new(
                Arc::new(MockTokenizer),
                Arc::new(MockSeq2Seq {
                    output,
                    fail: self.failing_generation.contains(&spec.key),
                }),
                params,
            ))
        }

        async fn load_spell_checker(
            &self,
            spec: &ModelSpec,
        ) -> Result<Arc<dyn SpellModel>, DomainError> {
            self.spell_loads.fetch_add(1, Ordering::SeqCst);

            self.spell_model
                .clone()
                .ok_or_else(|| DomainError::model_load(&spec.key, "mock spell load failure"))
        }

        fn backend_name(&self) -> &'static str {
            "mock"
        }
    }
}
