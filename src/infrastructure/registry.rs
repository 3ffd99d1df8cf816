//! Lazy, memoizing model registry.
//!
//! Each spec's instance slot transitions absent -> present exactly once per
//! process. A per-key semaphore serializes concurrent loads of the same key
//! so the expensive construction never runs twice; populated slots are read
//! without writer contention. Failed loads leave the slot absent, so a later
//! call may retry (no negative caching).

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{RwLock, Semaphore};
use tracing::{debug, info, warn};

use crate::domain::{DomainError, ModelSpec, SummarizerHandle};

use super::backend::ModelBackend;

pub struct ModelRegistry {
    specs: HashMap<String, ModelSpec>,
    /// Declaration order of the specs, for stable listings.
    order: Vec<String>,
    loaded: RwLock<HashMap<String, Arc<SummarizerHandle>>>,
    /// One permit per key; held only for the load step.
    load_locks: HashMap<String, Arc<Semaphore>>,
    backend: Arc<dyn ModelBackend>,
}

impl std::fmt::Debug for ModelRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelRegistry")
            .field("specs", &self.order)
            .field("backend", &self.backend.backend_name())
            .finish_non_exhaustive()
    }
}

impl ModelRegistry {
    pub fn new(specs: Vec<ModelSpec>, backend: Arc<dyn ModelBackend>) -> Self {
        let order: Vec<String> = specs.iter().map(|s| s.key.clone()).collect();
        let load_locks = specs
            .iter()
            .map(|s| (s.key.clone(), Arc::new(Semaphore::new(1))))
            .collect();
        let specs = specs.into_iter().map(|s| (s.key.clone(), s)).collect();

        Self {
            specs,
            order,
            loaded: RwLock::new(HashMap::new()),
            load_locks,
            backend,
        }
    }

    /// Identity lookup; never triggers loading.
    pub fn spec(&self, key: &str) -> Option<&ModelSpec> {
        self.specs.get(key)
    }

    /// Registered specs in declaration order; never triggers loading.
    pub fn specs(&self) -> Vec<&ModelSpec> {
        self.order.iter().filter_map(|k| self.specs.get(k)).collect()
    }

    /// Keys whose instance slot is populated.
    pub async fn loaded_keys(&self) -> Vec<String> {
        let loaded = self.loaded.read().await;
        self.order
            .iter()
            .filter(|k| loaded.contains_key(k.as_str()))
            .cloned()
            .collect()
    }

    /// Resolve a key to its ready (tokenizer, model) handle, constructing it
    /// on first use. Idempotent: subsequent calls return the same shared
    /// instance.
    pub async fn load(&self, key: &str) -> Result<Arc<SummarizerHandle>, DomainError> {
        // Fast path: already materialized.
        {
            let loaded = self.loaded.read().await;
            if let Some(handle) = loaded.get(key) {
                debug!(model_key = %key, "Model cache hit");
                return Ok(Arc::clone(handle));
            }
        }

        let spec = self
            .specs
            .get(key)
            .ok_or_else(|| DomainError::unknown_model(key))?;

        let lock = self
            .load_locks
            .get(key)
            .ok_or_else(|| DomainError::unknown_model(key))?;

        let _permit = lock
            .acquire()
            .await
            .map_err(|_| DomainError::internal(format!("load lock closed for '{}'", key)))?;

        // Another caller may have finished the load while we waited.
        {
            let loaded = self.loaded.read().await;
            if let Some(handle) = loaded.get(key) {
                debug!(model_key = %key, "Model loaded while waiting for lock");
                return Ok(Arc::clone(handle));
            }
        }

        info!(
            model_key = %key,
            family = %spec.family,
            source = %spec.source_locator,
            "Loading model"
        );

        let handle = match self.backend.load_summarizer(spec).await {
            Ok(handle) => Arc::new(handle),
            Err(e) => {
                warn!(model_key = %key, error = %e, "Model load failed");
                return Err(e);
            }
        };

        // Memoize on success only.
        self.loaded
            .write()
            .await
            .insert(key.to_string(), Arc::clone(&handle));

        info!(model_key = %key, "Model loaded");

        Ok(handle)
    }
}
