use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::jobs;
use crate::state::AppState;

/// Build the axum router: job routes under `api_root`, probes at the server root.
pub fn build_router(state: Arc<AppState>, api_root: &str) -> Router {
    let job_routes = Router::new()
        .route("/job-list", get(jobs::list).post(jobs::create))
        .route("/job-list/{id}", get(jobs::get_by_id));

    let root = api_root.trim_end_matches('/');
    let router = if root.is_empty() {
        Router::new().merge(job_routes)
    } else {
        Router::new().nest(root, job_routes)
    };

    router
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .layer(TraceLayer::new_for_http())
        .layer(Extension(state))
}

async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

async fn ready_handler(Extension(state): Extension<Arc<AppState>>) -> impl IntoResponse {
    match state.jobs.ping().await {
        Ok(()) => (StatusCode::OK, "OK"),
        Err(error) => {
            tracing::warn!(%error, "readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
        }
    }
}
