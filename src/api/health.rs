//! Health check endpoints for Kubernetes probes.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use super::state::AppState;
use super::types::Json;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Readiness response: registry counts, read without triggering loads.
#[derive(Serialize)]
pub struct ReadyResponse {
    pub status: HealthStatus,
    pub registered_models: usize,
    pub loaded_models: usize,
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check. Models load lazily, so readiness never blocks on a
/// load; it only reports what the registry already holds.
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let response = ReadyResponse {
        status: HealthStatus::Healthy,
        registered_models: state.registry.specs().len(),
        loaded_models: state.registry.loaded_keys().await.len(),
    };

    (StatusCode::OK, Json(response))
}

/// Liveness check - used by Kubernetes liveness probes to detect crashes
pub async fn live_check() -> impl IntoResponse {
    StatusCode::OK
}
