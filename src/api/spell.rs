//! Spell-check endpoints.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{error, info};
use uuid::Uuid;

use crate::domain::SpellCheckResult;

use super::state::AppState;
use super::types::{
    ApiError, Json, SpellCheckRequest, SpellCheckResponse, EMPTY_TEXT_MESSAGE,
    SPELL_FAILURE_MESSAGE,
};

/// POST /spellcheck and POST /api/spell_check
///
/// The pipeline itself never fails (worst case is the rule-based result),
/// so the 500 path only covers a panicked correction task. Even then the
/// response body is well-formed: the original text with nothing detected.
pub async fn spell_check(
    State(state): State<AppState>,
    Json(request): Json<SpellCheckRequest>,
) -> Result<Response, ApiError> {
    if request.text.trim().is_empty() {
        return Err(ApiError::bad_request(EMPTY_TEXT_MESSAGE));
    }

    let request_id = Uuid::new_v4().to_string();

    info!(
        request_id = %request_id,
        text_len = request.text.len(),
        "Processing spell-check request"
    );

    let spell = state.spell.clone();
    let text = request.text;
    let task_text = text.clone();

    match tokio::spawn(async move { spell.check(&task_text).await }).await {
        Ok(result) => Ok((StatusCode::OK, Json(to_response(result))).into_response()),
        Err(e) => {
            error!(request_id = %request_id, error = %e, "Spell-check task failed");
            Ok((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(fallback_response(text)),
            )
                .into_response())
        }
    }
}

fn to_response(result: SpellCheckResult) -> SpellCheckResponse {
    SpellCheckResponse {
        corrected_text: result.corrected_text,
        errors: result.errors,
        suggestions: result.suggestions,
        confidence: result.confidence,
        message: None,
    }
}

/// Best-effort body: original text unchanged, nothing detected, localized
/// operator-facing message.
fn fallback_response(text: String) -> SpellCheckResponse {
    SpellCheckResponse {
        corrected_text: text,
        errors: Vec::new(),
        suggestions: Vec::new(),
        confidence: 0.0,
        message: Some(SPELL_FAILURE_MESSAGE.to_string()),
    }
}
