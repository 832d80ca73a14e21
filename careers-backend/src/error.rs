use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use thiserror::Error;

use crate::service::JobServiceError;
use crate::store::StoreError;

const INTERNAL_MESSAGE: &str = "Internal server error";

/// Top-level API error shared by all route handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("validation error")]
    Validation(serde_json::Value),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JobServiceError> for ApiError {
    fn from(err: JobServiceError) -> Self {
        match err {
            JobServiceError::NotFound { .. } => ApiError::not_found("Job not found"),
            JobServiceError::Store(e) => ApiError::Store(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let code = status.as_u16();

        let payload = match self {
            ApiError::NotFound(message) | ApiError::BadRequest(message) => {
                json!({ "code": code, "message": message })
            }
            ApiError::Validation(mut v) => {
                if let Some(obj) = v.as_object_mut() {
                    obj.insert("code".into(), json!(code));
                    obj.insert("message".into(), json!("validation failed"));
                }
                v
            }
            ApiError::Store(err) => {
                // Details stay in the logs.
                tracing::error!(error = %err, "request failed");
                json!({ "code": code, "message": INTERNAL_MESSAGE })
            }
        };

        (status, Json(payload)).into_response()
    }
}
