use std::sync::Arc;

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::Json;

use crate::handlers::jobs::dto::{CreateJobDto, JobResponse};
use crate::validation::ValidatedJson;
use crate::{error::ApiError, state::AppState};

pub async fn create(
    Extension(state): Extension<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<CreateJobDto>,
) -> Result<(StatusCode, Json<JobResponse>), ApiError> {
    let row = state.jobs.post_job(body.into()).await?;
    tracing::info!(job_id = %row.id, title = %row.title, "job posted");
    Ok((StatusCode::CREATED, Json(JobResponse::from(row))))
}
