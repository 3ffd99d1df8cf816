//! Model catalog endpoint.

use std::collections::BTreeMap;

use axum::extract::State;

use super::state::AppState;
use super::types::{Json, ModelListing};

/// GET /get_models
///
/// Read-only projection of the registry's identity fields. Must never
/// trigger model loading.
pub async fn get_models(State(state): State<AppState>) -> Json<BTreeMap<String, ModelListing>> {
    let listing = state
        .registry
        .specs()
        .into_iter()
        .map(|spec| {
            (
                spec.key.clone(),
                ModelListing {
                    name: spec.display_name.clone(),
                },
            )
        })
        .collect();

    Json(listing)
}
