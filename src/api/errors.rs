use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::{ProgressError, StoreError};

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("No progress stored for this user")]
    ProgressNotFound,
    #[error(transparent)]
    Progress(#[from] ProgressError),
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            ApiError::InvalidRequest(_) => (StatusCode::BAD_REQUEST, "Invalid request"),
            ApiError::ProgressNotFound => (StatusCode::NOT_FOUND, "Progress not found"),
            ApiError::Progress(ProgressError::NoPlan) => {
                (StatusCode::CONFLICT, "No training plan")
            }
            ApiError::Progress(_) => (StatusCode::BAD_REQUEST, "Invalid workout"),
            ApiError::Store(error) => {
                tracing::error!(%error, "progress store failure");
                (StatusCode::INTERNAL_SERVER_ERROR, "Storage error")
            }
        };

        let body = Json(json!({
            "error": error_message,
            "message": self.to_string(),
        }));

        (status, body).into_response()
    }
}
