//! Infrastructure: model backends, the lazy registry, dispatch services,
//! and logging setup.

pub mod backend;
pub mod logging;
pub mod registry;
pub mod spell;
pub mod summarizer;

pub use backend::{HfBackend, HttpClient, ModelBackend};
pub use registry::ModelRegistry;
pub use spell::SpellCheckService;
pub use summarizer::SummaryService;
