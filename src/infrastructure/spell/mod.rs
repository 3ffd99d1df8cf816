//! Layered spell-correction pipeline.
//!
//! A single-slot state machine: `Uninitialized -> {ModelReady |
//! RuleFallback}`. The transition runs exactly once, on the first request.
//! A failed model construction degrades the slot permanently; a model that
//! fails during a request falls back to the rules for that request only.

mod model;
pub mod rules;

pub use model::KnownErrorClassifier;

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::domain::{ModelSpec, SpellCheckResult, SpellModel};

use super::backend::ModelBackend;

enum SpellSlot {
    Uninitialized,
    ModelReady(Arc<dyn SpellModel>),
    RuleFallback,
}

pub struct SpellCheckService {
    backend: Arc<dyn ModelBackend>,
    spec: ModelSpec,
    slot: Mutex<SpellSlot>,
}

impl std::fmt::Debug for SpellCheckService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpellCheckService")
            .field("spec", &self.spec.key)
            .finish_non_exhaustive()
    }
}

impl SpellCheckService {
    pub fn new(backend: Arc<dyn ModelBackend>, spec: ModelSpec) -> Self {
        Self {
            backend,
            spec,
            slot: Mutex::new(SpellSlot::Uninitialized),
        }
    }

    /// Correct `text`. Never fails: the worst case is the lower-confidence
    /// rule-based result. Empty text is rejected at the boundary, not here.
    pub async fn check(&self, text: &str) -> SpellCheckResult {
        match self.strategy().await {
            Some(model) => match model.correct(text).await {
                Ok(result) => result,
                Err(e) => {
                    // Transient: the slot stays ModelReady.
                    warn!(error = %e, "Spell model failed, using rules for this request");
                    rules::correct(text)
                }
            },
            None => rules::correct(text),
        }
    }

    /// One-shot initialization of the slot; the lock is held only for the
    /// transition and the strategy snapshot.
    async fn strategy(&self) -> Option<Arc<dyn SpellModel>> {
        let mut slot = self.slot.lock().await;

        if matches!(*slot, SpellSlot::Uninitialized) {
            match self.backend.load_spell_checker(&self.spec).await {
                Ok(model) => {
                    info!(model_key = %self.spec.key, "Spell-check model ready");
                    *slot = SpellSlot::ModelReady(model);
                }
                Err(e) => {
                    warn!(
                        model_key = %self.spec.key,
                        error = %e,
                        "Spell-check model unavailable, degrading to rule-based correction"
                    );
                    *slot = SpellSlot::RuleFallback;
                }
            }
        }

        match &*slot {
            SpellSlot::ModelReady(model) => Some(Arc::clone(model)),
            SpellSlot::RuleFallback => None,
            SpellSlot::Uninitialized => None,
        }
    }
}
