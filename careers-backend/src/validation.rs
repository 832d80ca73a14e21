use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;

#[derive(Debug, Serialize, Clone)]
pub struct ValidationIssue {
    pub field: String,
    pub code: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(
        field: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            code: code.into(),
            message: message.into(),
        }
    }
}

pub fn to_payload(issues: &[ValidationIssue]) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for issue in issues {
        map.insert(
            issue.field.clone(),
            serde_json::json!({ "code": issue.code, "message": issue.message }),
        );
    }
    serde_json::json!({ "validation": serde_json::Value::Object(map) })
}

/// Request bodies that check their own field-level rules.
pub trait Validate {
    /// Returns every violated rule; empty means valid.
    fn validate(&self) -> Vec<ValidationIssue>;
}

/// JSON body extractor that rejects malformed or invalid input before the
/// handler runs.
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;

        let issues = value.validate();
        if !issues.is_empty() {
            return Err(ApiError::Validation(to_payload(&issues)));
        }
        Ok(Self(value))
    }
}
