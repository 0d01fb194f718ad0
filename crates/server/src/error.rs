use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::{
    DbErr,
    models::{log::LogError, tech::TechError},
};
use serde::Serialize;
use thiserror::Error;

/// One failed check from request validation, in the shape the frontend
/// already consumes: `{"errors": [{"param": ..., "msg": ...}]}`.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub param: &'static str,
    pub msg: &'static str,
}

impl FieldError {
    pub fn new(param: &'static str, msg: &'static str) -> Self {
        Self { param, msg }
    }
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("validation failed")]
    Validation(Vec<FieldError>),
    #[error(transparent)]
    Log(#[from] LogError),
    #[error(transparent)]
    Tech(#[from] TechError),
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "errors": errors })),
            )
                .into_response(),
            ApiError::Log(LogError::NotFound) => not_found(&LogError::NotFound.to_string()),
            ApiError::Tech(TechError::NotFound) => not_found(&TechError::NotFound.to_string()),
            err => {
                tracing::error!(error = %err, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server Error").into_response()
            }
        }
    }
}

fn not_found(msg: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(serde_json::json!({ "msg": msg }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let response = ApiError::Validation(vec![FieldError::new("message", "Message is required")])
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404_for_both_resources() {
        assert_eq!(
            ApiError::from(LogError::NotFound).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::from(TechError::NotFound).into_response().status(),
            StatusCode::NOT_FOUND
        );
        // Both resources report the same message text.
        assert_eq!(TechError::NotFound.to_string(), LogError::NotFound.to_string());
    }

    #[test]
    fn storage_and_internal_errors_map_to_500() {
        assert_eq!(
            ApiError::Database(DbErr::Custom("boom".to_string()))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal("bad id".to_string())
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(LogError::Database(DbErr::Custom("boom".to_string())))
                .into_response()
                .status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
