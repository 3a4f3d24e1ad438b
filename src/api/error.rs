use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::models::ValidationError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation failed with {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    /// An extractor refused the request before the handler ran.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
    #[error("Persistence error: {0}")]
    Persistence(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "validationErrors": errors })),
            )
                .into_response(),
            ApiError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("{} not found", resource) })),
            )
                .into_response(),
            ApiError::InvalidBody(reason) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Invalid request body", "message": reason })),
            )
                .into_response(),
            ApiError::Rejected { status, message } => (
                status,
                Json(json!({
                    "error": status.canonical_reason().unwrap_or("Bad request"),
                    "message": message,
                })),
            )
                .into_response(),
            ApiError::Persistence(err) => {
                tracing::error!(error = ?err, "Store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Rejected {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}
