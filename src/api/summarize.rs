//! Summarization endpoints.

use axum::extract::State;
use tracing::info;
use uuid::Uuid;

use super::state::AppState;
use super::types::{ApiError, Json, SummarizeRequest, SummarizeResponse, EMPTY_TEXT_MESSAGE};

/// POST /summarize and POST /api/summarize
///
/// Fans the text out to every requested model. Unknown keys contribute no
/// result entry; a failing model contributes an in-band error summary, so
/// one model never voids the batch.
pub async fn summarize(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::bad_request(EMPTY_TEXT_MESSAGE));
    }

    let request_id = Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        models = ?request.models,
        text_len = request.text.len(),
        "Processing summarization request"
    );

    let results = state
        .summaries
        .summarize_all(&request.text, &request.models)
        .await;

    Ok(Json(SummarizeResponse { results }))
}
