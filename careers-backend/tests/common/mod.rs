#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use careers_backend::service::JobService;
use careers_backend::state::AppState;
use careers_backend::store::{JobStore, SqlJobStore, StoreError};
use careers_db::jobs::{JobsRow, NewJob};
use careers_db::{create_pool, DbConnectionConfig};
use http_body_util::BodyExt;

pub const API_ROOT: &str = "/career";

/// App state over a migrated single-connection in-memory SQLite database.
pub async fn sqlite_state() -> Arc<AppState> {
    let config = DbConnectionConfig::new("sqlite::memory:").with_max_connections(1);
    let pool = create_pool(&config).await.expect("create pool");
    careers_db::migrator()
        .run(&pool)
        .await
        .expect("migrate");
    let store = SqlJobStore::new(pool);
    Arc::new(AppState::new(JobService::new(Arc::new(store))))
}

pub fn failing_state() -> Arc<AppState> {
    Arc::new(AppState::new(JobService::new(Arc::new(FailingStore))))
}

/// Store whose every call fails, as if the database had gone away.
pub struct FailingStore;

#[async_trait]
impl JobStore for FailingStore {
    async fn insert(&self, _job: NewJob) -> Result<JobsRow, StoreError> {
        Err(StoreError::Unavailable("database is down".into()))
    }

    async fn list(&self) -> Result<Vec<JobsRow>, StoreError> {
        Err(StoreError::Unavailable("database is down".into()))
    }

    async fn get_by_id(&self, _id: &str) -> Result<Option<JobsRow>, StoreError> {
        Err(StoreError::Unavailable("database is down".into()))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database is down".into()))
    }
}

pub fn software_engineer() -> serde_json::Value {
    serde_json::json!({
        "title": "Software Engineer",
        "location": "New York",
        "type": "Full-time",
        "department": "Engineering",
        "lastDate": "2024-09-30",
        "jobDescription": "Responsible for developing software applications.",
        "responsibilities": ["Write and maintain code", "Collaborate with cross-functional teams"],
        "requirements": ["Bachelor's degree in Computer Science", "3+ years of experience"],
        "benefits": ["Health insurance", "401(k) plan"],
        "vacancy": 3,
        "jobType": "Full-time",
        "workingDays": "Monday - Friday"
    })
}

pub async fn read_json(res: axum::response::Response) -> serde_json::Value {
    let bytes = res
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}
