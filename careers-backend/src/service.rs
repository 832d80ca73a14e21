use std::sync::Arc;

use careers_db::jobs::{JobsRow, NewJob};
use thiserror::Error;

use crate::store::{JobStore, StoreError};

#[derive(Debug, Error)]
pub enum JobServiceError {
    #[error("job {id} not found")]
    NotFound { id: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Thin orchestration over a [`JobStore`]. Input is assumed validated.
#[derive(Clone)]
pub struct JobService {
    store: Arc<dyn JobStore>,
}

impl JobService {
    pub fn new(store: Arc<dyn JobStore>) -> Self {
        Self { store }
    }

    pub async fn post_job(&self, input: NewJob) -> Result<JobsRow, JobServiceError> {
        Ok(self.store.insert(input).await?)
    }

    pub async fn get_job_list(&self) -> Result<Vec<JobsRow>, JobServiceError> {
        Ok(self.store.list().await?)
    }

    pub async fn get_job_by_id(&self, id: &str) -> Result<JobsRow, JobServiceError> {
        self.store
            .get_by_id(id)
            .await?
            .ok_or_else(|| JobServiceError::NotFound { id: id.to_string() })
    }

    pub async fn ping(&self) -> Result<(), JobServiceError> {
        Ok(self.store.ping().await?)
    }
}
