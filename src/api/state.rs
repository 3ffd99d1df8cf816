//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::{ModelRegistry, SpellCheckService, SummaryService};

/// Application state containing shared services
#[derive(Clone)]
pub struct AppState {
    pub summaries: Arc<SummaryService>,
    pub spell: Arc<SpellCheckService>,
    pub registry: Arc<ModelRegistry>,
}

impl AppState {
    pub fn new(
        summaries: Arc<SummaryService>,
        spell: Arc<SpellCheckService>,
        registry: Arc<ModelRegistry>,
    ) -> Self {
        Self {
            summaries,
            spell,
            registry,
        }
    }
}
