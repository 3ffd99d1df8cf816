//! Khmer Text Gateway
//!
//! An HTTP service for Khmer-language text summarization and spell
//! correction over multiple interchangeable pretrained models:
//! - Lazy per-model loading, memoized for the process lifetime
//! - Multi-model fan-out summarization with partial-failure isolation
//! - Layered spell correction with a rule-based fallback

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
