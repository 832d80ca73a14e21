//! Persistence model and queries for the `jobs` table.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::Executor;

use crate::DbBackend;

const LIST_JOBS: &str = "SELECT id, title, location, type, department, last_date, \
     job_description, responsibilities, requirements, benefits, vacancy, job_type, working_days, \
     created_at FROM jobs ORDER BY created_at, id";

#[cfg(not(feature = "mysql"))]
const FIND_JOB: &str = "SELECT id, title, location, type, department, last_date, \
     job_description, responsibilities, requirements, benefits, vacancy, job_type, working_days, \
     created_at FROM jobs WHERE id = $1";
#[cfg(feature = "mysql")]
const FIND_JOB: &str = "SELECT id, title, location, type, department, last_date, \
     job_description, responsibilities, requirements, benefits, vacancy, job_type, working_days, \
     created_at FROM jobs WHERE id = ?";

#[cfg(not(feature = "mysql"))]
const INSERT_JOB: &str = "INSERT INTO jobs (id, title, location, type, department, last_date, \
     job_description, responsibilities, requirements, benefits, vacancy, job_type, working_days, \
     created_at) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)";
#[cfg(feature = "mysql")]
const INSERT_JOB: &str = "INSERT INTO jobs (id, title, location, type, department, last_date, \
     job_description, responsibilities, requirements, benefits, vacancy, job_type, working_days, \
     created_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

/// One row of the `jobs` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct JobsRow {
    pub id: String,
    pub title: String,
    pub location: String,
    #[sqlx(rename = "type")]
    pub r#type: String,
    pub department: String,
    pub last_date: NaiveDate,
    pub job_description: String,
    pub responsibilities: Json<Vec<String>>,
    pub requirements: Json<Vec<String>>,
    pub benefits: Json<Vec<String>>,
    pub vacancy: i32,
    pub job_type: String,
    pub working_days: String,
    pub created_at: String,
}

/// Every column a caller supplies when creating a job; identity and
/// timestamps are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub location: String,
    pub r#type: String,
    pub department: String,
    pub last_date: NaiveDate,
    pub job_description: String,
    pub responsibilities: Vec<String>,
    pub requirements: Vec<String>,
    pub benefits: Vec<String>,
    pub vacancy: i32,
    pub job_type: String,
    pub working_days: String,
}

impl NewJob {
    /// Builds the row that will be persisted for this job.
    pub fn into_row(self, id: String, created_at: String) -> JobsRow {
        JobsRow {
            id,
            title: self.title,
            location: self.location,
            r#type: self.r#type,
            department: self.department,
            last_date: self.last_date,
            job_description: self.job_description,
            responsibilities: Json(self.responsibilities),
            requirements: Json(self.requirements),
            benefits: Json(self.benefits),
            vacancy: self.vacancy,
            job_type: self.job_type,
            working_days: self.working_days,
            created_at,
        }
    }
}

pub async fn insert_job<'e, E>(executor: E, row: &JobsRow) -> Result<(), sqlx::Error>
where
    E: Executor<'e, Database = DbBackend>,
{
    sqlx::query(INSERT_JOB)
        .bind(&row.id)
        .bind(&row.title)
        .bind(&row.location)
        .bind(&row.r#type)
        .bind(&row.department)
        .bind(row.last_date)
        .bind(&row.job_description)
        .bind(&row.responsibilities)
        .bind(&row.requirements)
        .bind(&row.benefits)
        .bind(row.vacancy)
        .bind(&row.job_type)
        .bind(&row.working_days)
        .bind(&row.created_at)
        .execute(executor)
        .await?;
    Ok(())
}

pub async fn list_all<'e, E>(executor: E) -> Result<Vec<JobsRow>, sqlx::Error>
where
    E: Executor<'e, Database = DbBackend>,
{
    sqlx::query_as::<_, JobsRow>(LIST_JOBS)
        .fetch_all(executor)
        .await
}

pub async fn find_by_primary_key<'e, E>(
    executor: E,
    id: &str,
) -> Result<Option<JobsRow>, sqlx::Error>
where
    E: Executor<'e, Database = DbBackend>,
{
    sqlx::query_as::<_, JobsRow>(FIND_JOB)
        .bind(id)
        .fetch_optional(executor)
        .await
}

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;
    use crate::{create_pool, DbConnectionConfig};

    async fn migrated_pool() -> crate::DbPool {
        let config = DbConnectionConfig::new("sqlite::memory:").with_max_connections(1);
        let pool = create_pool(&config).await.expect("create pool");
        crate::migrator()
            .run(&pool)
            .await
            .expect("migrate");
        pool
    }

    fn sample(title: &str) -> NewJob {
        NewJob {
            title: title.to_string(),
            location: "New York".to_string(),
            r#type: "Full-time".to_string(),
            department: "Engineering".to_string(),
            last_date: NaiveDate::from_ymd_opt(2024, 9, 30).expect("date"),
            job_description: "Responsible for developing software applications.".to_string(),
            responsibilities: vec!["Write and maintain code".into(), "Review PRs".into()],
            requirements: vec!["3+ years of experience".into()],
            benefits: vec!["Health insurance".into(), "401(k) plan".into()],
            vacancy: 3,
            job_type: "Full-time".to_string(),
            working_days: "Monday - Friday".to_string(),
        }
    }

    #[tokio::test]
    async fn insert_then_find_round_trips_all_columns() {
        let pool = migrated_pool().await;
        let row = sample("Software Engineer")
            .into_row("job-1".to_string(), "2024-08-01T00:00:00+00:00".to_string());
        insert_job(&pool, &row).await.expect("insert");

        let found = find_by_primary_key(&pool, "job-1")
            .await
            .expect("find")
            .expect("row present");
        assert_eq!(found, row);
        assert_eq!(found.responsibilities.0[1], "Review PRs");
    }

    #[tokio::test]
    async fn find_missing_returns_none() {
        let pool = migrated_pool().await;
        let found = find_by_primary_key(&pool, "does-not-exist")
            .await
            .expect("find");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn list_all_orders_by_creation() {
        let pool = migrated_pool().await;
        let later = sample("Designer").into_row("b".into(), "2024-08-02T00:00:00+00:00".into());
        let earlier = sample("Engineer").into_row("a".into(), "2024-08-01T00:00:00+00:00".into());
        insert_job(&pool, &later).await.expect("insert later");
        insert_job(&pool, &earlier).await.expect("insert earlier");

        let rows = list_all(&pool).await.expect("list");
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn duplicate_primary_key_is_rejected() {
        let pool = migrated_pool().await;
        let row = sample("Engineer").into_row("dup".into(), "2024-08-01T00:00:00+00:00".into());
        insert_job(&pool, &row).await.expect("first insert");
        assert!(insert_job(&pool, &row).await.is_err());
    }
}
