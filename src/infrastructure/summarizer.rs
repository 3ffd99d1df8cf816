//! Summarization dispatch: per-model generation and multi-model fan-out.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::{
    tidy_summary, DomainError, ModelSummary, SummaryOutcome, MAX_INPUT_TOKENS,
};

use super::registry::ModelRegistry;

pub struct SummaryService {
    registry: Arc<ModelRegistry>,
}

impl SummaryService {
    pub fn new(registry: Arc<ModelRegistry>) -> Self {
        Self { registry }
    }

    /// Summarize `text` with one model. Trimmed-empty input short-circuits
    /// to an empty summary without touching the registry. Load and inference
    /// failures are converted to an in-band failure outcome; only an unknown
    /// key escapes as an error.
    pub async fn summarize(&self, text: &str, key: &str) -> Result<SummaryOutcome, DomainError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(SummaryOutcome::Summarized(String::new()));
        }

        if self.registry.spec(key).is_none() {
            return Err(DomainError::unknown_model(key));
        }

        match self.run_generation(text, key).await {
            Ok(summary) => Ok(SummaryOutcome::Summarized(summary)),
            Err(e) => {
                warn!(model_key = %key, error = %e, "Summarization failed");
                Ok(SummaryOutcome::failure(e))
            }
        }
    }

    async fn run_generation(&self, text: &str, key: &str) -> Result<String, DomainError> {
        let handle = self.registry.load(key).await?;

        let input = handle.tokenizer.truncate(text, MAX_INPUT_TOKENS)?;
        let decoded = handle.model.generate(&input, &handle.params).await?;

        debug!(model_key = %key, decoded_len = decoded.len(), "Generation complete");

        Ok(tidy_summary(&decoded))
    }

    /// Fan out over the requested keys, one result entry per known key.
    /// Unknown keys are silently skipped; one model's failure does not
    /// prevent other models' results.
    pub async fn summarize_all(
        &self,
        text: &str,
        keys: &[String],
    ) -> BTreeMap<String, ModelSummary> {
        let mut results = BTreeMap::new();

        for key in keys {
            let Some(spec) = self.registry.spec(key) else {
                debug!(model_key = %key, "Skipping unknown model key");
                continue;
            };
            let display_name = spec.display_name.clone();

            // Infallible for a known key: failures are in-band outcomes.
            let outcome = match self.summarize(text, key).await {
                Ok(outcome) => outcome,
                Err(e) => SummaryOutcome::failure(e),
            };

            results.insert(
                key.clone(),
                ModelSummary {
                    display_name,
                    outcome,
                },
            );
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::domain::builtin_specs;
    use crate::domain::summary::EMPTY_SUMMARY_PLACEHOLDER;
    use crate::infrastructure::backend::mock::MockBackend;

    fn service_with(backend: Arc<MockBackend>) -> SummaryService {
        SummaryService::new(Arc::new(ModelRegistry::new(builtin_specs(), backend)))
    }

    #[tokio::test]
    async fn test_empty_text_never_invokes_a_model() {
        let backend = Arc::new(MockBackend::new());
        let service = service_with(backend.clone());

        for text in ["", "   ", "\n\t  "] {
            let outcome = service.summarize(text, "model1").await.unwrap();
            assert_eq!(outcome, SummaryOutcome::Summarized(String::new()));
        }

        assert_eq!(backend.summarizer_loads(), 0);
    }

    #[tokio::test]
    async fn test_unknown_key_single_summarize_errors() {
        let backend = Arc::new(MockBackend::new());
        let service = service_with(backend);

        let err = service.summarize("អត្ថបទ", "bogus").await.unwrap_err();
        assert!(matches!(err, DomainError::UnknownModel { .. }));
    }

    #[tokio::test]
    async fn test_summarize_trims_after_last_terminator() {
        let backend = Arc::new(
            MockBackend::new().with_output("model1", "ប្រយោគទីមួយ។ ប្រយោគទីពីរ។ កាកសំណល់"),
        );
        let service = service_with(backend);

        let outcome = service.summarize("អត្ថបទវែង", "model1").await.unwrap();
        assert_eq!(
            outcome,
            SummaryOutcome::Summarized("ប្រយោគទីមួយ។ ប្រយោគទីពីរ។".to_string())
        );
    }

    #[tokio::test]
    async fn test_summarize_without_terminator_keeps_stripped_output() {
        let backend = Arc::new(MockBackend::new().with_output("model2", "  សង្ខេបខ្លី  "));
        let service = service_with(backend);

        let outcome = service.summarize("អត្ថបទ", "model2").await.unwrap();
        assert_eq!(outcome, SummaryOutcome::Summarized("សង្ខេបខ្លី".to_string()));
    }

    #[tokio::test]
    async fn test_blank_generation_becomes_placeholder() {
        let backend = Arc::new(MockBackend::new().with_output("model1", "   "));
        let service = service_with(backend);

        let outcome = service.summarize("អត្ថបទ", "model1").await.unwrap();
        assert_eq!(
            outcome,
            SummaryOutcome::Summarized(EMPTY_SUMMARY_PLACEHOLDER.to_string())
        );
    }

    #[tokio::test]
    async fn test_load_failure_is_an_in_band_outcome() {
        let backend = Arc::new(MockBackend::new().with_failing_load("model1"));
        let service = service_with(backend);

        let outcome = service.summarize("អត្ថបទ", "model1").await.unwrap();
        assert!(outcome.is_failed());
        assert!(outcome.as_text().starts_with("កំហុស៖"));
    }

    #[tokio::test]
    async fn test_repeat_summarize_is_deterministic() {
        let backend = Arc::new(MockBackend::new().with_output("model1", "សង្ខេប។"));
        let service = service_with(backend.clone());

        let first = service.summarize("អត្ថបទ", "model1").await.unwrap();
        let second = service.summarize("អត្ថបទ", "model1").await.unwrap();

        assert_eq!(first, second);
        assert_eq!(backend.summarizer_loads(), 1);
    }

    #[tokio::test]
    async fn test_fan_out_skips_unknown_keys() {
        let backend = Arc::new(MockBackend::new().with_output("model1", "សង្ខេប។"));
        let service = service_with(backend);

        let keys = vec!["model1".to_string(), "bogus".to_string()];
        let results = service.summarize_all("អត្ថបទ", &keys).await;

        assert_eq!(results.len(), 1);
        assert!(results.contains_key("model1"));
    }

    #[tokio::test]
    async fn test_fan_out_isolates_failures() {
        let backend = Arc::new(
            MockBackend::new()
                .with_failing_load("model1")
                .with_output("model2", "សង្ខេប។"),
        );
        let service = service_with(backend);

        let keys = vec!["model1".to_string(), "model2".to_string()];
        let results = service.summarize_all("អត្ថបទ", &keys).await;

        assert_eq!(results.len(), 2);
        assert!(results["model1"].outcome.is_failed());
        assert_eq!(
            results["model2"].outcome,
            SummaryOutcome::Summarized("សង្ខេប។".to_string())
        );
        assert_eq!(
            results["model2"].display_name,
            "Model 2 - Khmer mT5 Summarization"
        );
    }

    #[tokio::test]
    async fn test_generation_failure_is_an_in_band_outcome() {
        let backend = Arc::new(MockBackend::new().with_failing_generation("model2"));
        let service = service_with(backend);

        let outcome = service.summarize("អត្ថបទ", "model2").await.unwrap();
        assert!(outcome.is_failed());
        assert!(outcome.as_text().contains("generation failed"));
    }
}
