use std::sync::Arc;

use axum::extract::rejection::PathRejection;
use axum::extract::{Extension, Path};
use axum::Json;

use crate::handlers::jobs::dto::JobResponse;
use crate::{error::ApiError, state::AppState};

/// An id that cannot be decoded from the path cannot name a job, so it gets
/// the same 404 as any unknown id.
pub async fn get_by_id(
    Extension(state): Extension<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<JobResponse>, ApiError> {
    let Path(id) = path.map_err(|rejection| {
        tracing::debug!(%rejection, "undecodable job id");
        ApiError::not_found("Job not found")
    })?;

    tracing::debug!(job_id = %id, "fetching job");
    let row = state.jobs.get_job_by_id(&id).await?;
    Ok(Json(JobResponse::from(row)))
}
