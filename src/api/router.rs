use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::health;
use super::models;
use super::spell;
use super::state::AppState;
use super::summarize;

/// Create a minimal router without state (probes only)
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/live", get(health::live_check))
        .layer(TraceLayer::new_for_http())
}

/// Create the full router with application state. The summarization and
/// spell-check endpoints are each exposed under two paths, matching the
/// page-facing and API-facing variants the frontend calls.
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Summarization
        .route("/summarize", post(summarize::summarize))
        .route("/api/summarize", post(summarize::summarize))
        // Model catalog
        .route("/get_models", get(models::get_models))
        // Spell check
        .route("/spellcheck", post(spell::spell_check))
        .route("/api/spell_check", post(spell::spell_check))
        // Add state and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
