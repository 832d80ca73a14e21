use crate::service::JobService;

/// Shared application state passed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub jobs: JobService,
}

impl AppState {
    pub fn new(jobs: JobService) -> Self {
        Self { jobs }
    }
}
