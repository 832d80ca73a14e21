use std::sync::Arc;

use axum::extract::Extension;
use axum::Json;

use crate::handlers::jobs::dto::JobResponse;
use crate::{error::ApiError, state::AppState};

pub async fn list(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<JobResponse>>, ApiError> {
    let rows = state.jobs.get_job_list().await?;
    tracing::debug!(count = rows.len(), "listing jobs");
    Ok(Json(rows.into_iter().map(JobResponse::from).collect()))
}
