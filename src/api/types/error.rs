//! Wire error type: a status code with a flat `{"error": <message>}` body,
//! the shape the frontend consumes.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json as AxumJson,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Flat error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody {
                error: message.into(),
            },
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, AxumJson(self.body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::Validation { message } => Self::bad_request(message),
            DomainError::UnknownModel { .. } => Self::not_found(err.to_string()),
            DomainError::UnknownModelFamily { .. } => Self::internal(err.to_string()),
            DomainError::ModelLoad { .. } | DomainError::Inference { .. } => {
                Self::unavailable(err.to_string())
            }
            DomainError::Configuration { message } | DomainError::Internal { message } => {
                Self::internal(message)
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.body.error)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_is_flat() {
        let err = ApiError::bad_request("សូមបញ្ចូលអត្ថបទសិន។");
        let json = serde_json::to_string(&err.body).unwrap();
        assert_eq!(json, "{\"error\":\"សូមបញ្ចូលអត្ថបទសិន។\"}");
    }

    #[test]
    fn test_domain_error_mapping() {
        let api: ApiError = DomainError::validation("empty").into();
        assert_eq!(api.status, StatusCode::BAD_REQUEST);

        let api: ApiError = DomainError::unknown_model("bogus").into();
        assert_eq!(api.status, StatusCode::NOT_FOUND);

        let api: ApiError = DomainError::model_load("model1", "x").into();
        assert_eq!(api.status, StatusCode::SERVICE_UNAVAILABLE);

        let api: ApiError = DomainError::internal("x").into();
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
