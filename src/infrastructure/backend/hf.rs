//! Hugging Face-backed model materialization.
//!
//! Tokenizer artifacts are staged through the hub into a local
//! content-addressed cache; generation itself runs against a hosted
//! inference endpoint, so beam search stays an opaque capability of the
//! serving runtime. mbart keys compose the shared base checkpoint with the
//! adapter published at the spec's source locator.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tokenizers::Tokenizer;
use tracing::info;

use crate::domain::model::{MBART_BASE_REPO, MBART_SRC_LANG, MBART_TGT_LANG};
use crate::domain::{
    DomainError, GenerationParams, ModelFamily, ModelSpec, Seq2SeqModel, SpellModel,
    SummarizerHandle, TextTokenizer,
};
use crate::infrastructure::spell::KnownErrorClassifier;

use super::{HttpClientTrait, ModelBackend};

const DEFAULT_ENDPOINT: &str = "https://api-inference.huggingface.co";

/// Lexicon artifact for the spellcheck family: a JSON list of
/// (misspelling, correction) pairs.
const SPELL_LEXICON_FILE: &str = "lexicon.json";

#[derive(Debug, Clone)]
pub struct HfBackendConfig {
    /// Base URL of the hosted inference endpoint.
    pub endpoint: String,
    /// Local artifact cache, content-addressed by repo and revision.
    pub cache_dir: PathBuf,
    /// Optional hub token, forwarded to both the hub and the endpoint.
    pub api_token: Option<String>,
}

impl Default for HfBackendConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            cache_dir: PathBuf::from("./cache"),
            api_token: None,
        }
    }
}

/// Backend that resolves specs against the Hugging Face hub.
#[derive(Debug)]
pub struct HfBackend {
    http: Arc<dyn HttpClientTrait>,
    config: HfBackendConfig,
}

impl HfBackend {
    pub fn new(http: Arc<dyn HttpClientTrait>, config: HfBackendConfig) -> Self {
        let endpoint = config.endpoint.trim_end_matches('/').to_string();
        Self {
            http,
            config: HfBackendConfig { endpoint, ..config },
        }
    }

    fn hub(&self) -> Result<hf_hub::api::tokio::Api, DomainError> {
        hf_hub::api::tokio::ApiBuilder::new()
            .with_cache_dir(self.config.cache_dir.clone())
            .with_token(self.config.api_token.clone())
            .build()
            .map_err(|e| DomainError::configuration(format!("hub client: {}", e)))
    }

    /// Stage a single artifact into the local cache and return its path.
    async fn stage_artifact(
        &self,
        spec_key: &str,
        repo: &str,
        filename: &str,
    ) -> Result<PathBuf, DomainError> {
        self.hub()?
            .model(repo.to_string())
            .get(filename)
            .await
            .map_err(|e| {
                DomainError::model_load(
                    spec_key,
                    format!("failed to stage {} from {}: {}", filename, repo, e),
                )
            })
    }

    async fn load_tokenizer(
        &self,
        spec_key: &str,
        repo: &str,
    ) -> Result<HfTokenizer, DomainError> {
        let path = self.stage_artifact(spec_key, repo, "tokenizer.json").await?;

        let inner = Tokenizer::from_file(&path).map_err(|e| {
            DomainError::model_load(spec_key, format!("tokenizer construction: {}", e))
        })?;

        Ok(HfTokenizer {
            inner,
            model_key: spec_key.to_string(),
        })
    }

    fn remote_model(
        &self,
        spec: &ModelSpec,
        lang_tags: Option<(String, String)>,
    ) -> RemoteSeq2Seq {
        RemoteSeq2Seq {
            http: self.http.clone(),
            url: format!("{}/models/{}", self.config.endpoint, spec.source_locator),
            auth_header: self
                .config
                .api_token
                .as_ref()
                .map(|t| format!("Bearer {}", t)),
            model_key: spec.key.clone(),
            lang_tags,
        }
    }
}

#[async_trait]
impl ModelBackend for HfBackend {
    async fn load_summarizer(&self, spec: &ModelSpec) -> Result<SummarizerHandle, DomainError> {
        let params = GenerationParams::for_family(spec.family)
            .ok_or_else(|| DomainError::unknown_family(spec.family.to_string()))?;

        let handle = match spec.family {
            ModelFamily::Mbart => {
                // Tokenizer comes from the shared base checkpoint, fixed to
                // the Khmer locale tags. The adapter is resolved up front so
                // a missing repo surfaces as a load failure, not a
                // per-request inference failure.
                let tokenizer = self.load_tokenizer(&spec.key, MBART_BASE_REPO).await?;
                self.stage_artifact(&spec.key, &spec.source_locator, "adapter_config.json")
                    .await?;

                let model = self.remote_model(
                    spec,
                    Some((MBART_SRC_LANG.to_string(), MBART_TGT_LANG.to_string())),
                );

                SummarizerHandle::new(Arc::new(tokenizer), Arc::new(model), params)
            }
            ModelFamily::Mt5 => {
                let tokenizer = self.load_tokenizer(&spec.key, &spec.source_locator).await?;
                let model = self.remote_model(spec, None);

                SummarizerHandle::new(Arc::new(tokenizer), Arc::new(model), params)
            }
            ModelFamily::Spellcheck => {
                return Err(DomainError::unknown_family(spec.family.to_string()));
            }
        };

        info!(
            model_key = %spec.key,
            family = %spec.family,
            source = %spec.source_locator,
            "Model materialized"
        );

        Ok(handle)
    }

    async fn load_spell_checker(
        &self,
        spec: &ModelSpec,
    ) -> Result<Arc<dyn SpellModel>, DomainError> {
        if spec.family != ModelFamily::Spellcheck {
            return Err(DomainError::unknown_family(spec.family.to_string()));
        }

        let path = self
            .stage_artifact(&spec.key, &spec.source_locator, SPELL_LEXICON_FILE)
            .await?;

        let raw = tokio::fs::read_to_string(&path).await.map_err(|e| {
            DomainError::model_load(&spec.key, format!("lexicon read: {}", e))
        })?;

        let pairs: Vec<(String, String)> = serde_json::from_str(&raw).map_err(|e| {
            DomainError::model_load(&spec.key, format!("lexicon parse: {}", e))
        })?;

        info!(
            model_key = %spec.key,
            entries = pairs.len(),
            "Spell-check model materialized"
        );

        Ok(Arc::new(KnownErrorClassifier::new(pairs)))
    }

    fn backend_name(&self) -> &'static str {
        "huggingface"
    }
}

/// Tokenizer half of a loaded pair, backed by a staged `tokenizer.json`.
pub struct HfTokenizer {
    inner: Tokenizer,
    model_key: String,
}

impl std::fmt::Debug for HfTokenizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HfTokenizer")
            .field("model_key", &self.model_key)
            .finish_non_exhaustive()
    }
}

impl TextTokenizer for HfTokenizer {
    fn truncate(&self, text: &str, max_tokens: usize) -> Result<String, DomainError> {
        let encoding = self
            .inner
            .encode(text, false)
            .map_err(|e| DomainError::inference(&self.model_key, format!("tokenize: {}", e)))?;

        let ids = encoding.get_ids();
        if ids.len() <= max_tokens {
            return Ok(text.to_string());
        }

        self.inner
            .decode(&ids[..max_tokens], true)
            .map_err(|e| DomainError::inference(&self.model_key, format!("detokenize: {}", e)))
    }
}

/// Model half of a loaded pair: a client for the hosted generation endpoint.
#[derive(Debug)]
pub struct RemoteSeq2Seq {
    http: Arc<dyn HttpClientTrait>,
    url: String,
    auth_header: Option<String>,
    model_key: String,
    lang_tags: Option<(String, String)>,
}

impl RemoteSeq2Seq {
    fn build_request(&self, input: &str, params: &GenerationParams) -> serde_json::Value {
        let mut parameters = json!({
            "num_beams": params.num_beams,
            "max_new_tokens": params.max_new_tokens,
            "early_stopping": params.early_stopping,
        });

        if let Some((src, tgt)) = &self.lang_tags {
            parameters["src_lang"] = json!(src);
            parameters["tgt_lang"] = json!(tgt);
        }

        json!({
            "inputs": input,
            "parameters": parameters,
            "options": { "wait_for_model": true },
        })
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        let mut headers = vec![("Content-Type", "application/json")];
        if let Some(auth) = &self.auth_header {
            headers.push(("Authorization", auth.as_str()));
        }
        headers
    }

    fn parse_response(&self, value: serde_json::Value) -> Result<String, DomainError> {
        if let Some(error) = value.get("error").and_then(|e| e.as_str()) {
            return Err(DomainError::inference(&self.model_key, error));
        }

        value
            .get(0)
            .and_then(|entry| {
                entry
                    .get("summary_text")
                    .or_else(|| entry.get("generated_text"))
            })
            .and_then(|text| text.as_str())
            .map(|text| text.to_string())
            .ok_or_else(|| {
                DomainError::inference(&self.model_key, "no generated text in response")
            })
    }
}

#[async_trait]
impl Seq2SeqModel for RemoteSeq2Seq {
    async fn generate(
        &self,
        input: &str,
        params: &GenerationParams,
    ) -> Result<String, DomainError> {
        let body = self.build_request(input, params);
        let response = self.http.post_json(&self.url, self.headers(), &body).await?;
        self.parse_response(response)
    }
}
