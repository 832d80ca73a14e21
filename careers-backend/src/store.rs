//! Persistence seam for job postings.
//!
//! Handlers and the service only see [`JobStore`]; [`SqlJobStore`] is the
//! implementation backed by the SQLx pool.

use std::sync::Arc;

use async_trait::async_trait;
use careers_db::jobs::{self as db_jobs, JobsRow, NewJob};
use careers_db::DbPool;
use chrono::{SecondsFormat, Utc};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait JobStore: Send + Sync {
    /// Persists a new job and returns it with its assigned identity.
    async fn insert(&self, job: NewJob) -> Result<JobsRow, StoreError>;

    async fn list(&self) -> Result<Vec<JobsRow>, StoreError>;

    async fn get_by_id(&self, id: &str) -> Result<Option<JobsRow>, StoreError>;

    /// Cheap round trip used by the readiness probe.
    async fn ping(&self) -> Result<(), StoreError>;
}

pub struct SqlJobStore {
    pool: Arc<DbPool>,
}

impl SqlJobStore {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

#[async_trait]
impl JobStore for SqlJobStore {
    async fn insert(&self, job: NewJob) -> Result<JobsRow, StoreError> {
        let id = Uuid::new_v4().to_string();
        let created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true);
        let row = job.into_row(id, created_at);

        db_jobs::insert_job(&*self.pool, &row).await?;
        Ok(row)
    }

    async fn list(&self) -> Result<Vec<JobsRow>, StoreError> {
        Ok(db_jobs::list_all(&*self.pool).await?)
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<JobsRow>, StoreError> {
        Ok(db_jobs::find_by_primary_key(&*self.pool, id).await?)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").execute(&*self.pool).await?;
        Ok(())
    }
}
