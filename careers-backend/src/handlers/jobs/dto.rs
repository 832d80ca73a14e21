//! Wire shapes for the job-postings routes.

use careers_db::jobs::{JobsRow, NewJob};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationIssue};

pub const TITLE_MAX_CHARS: usize = 200;

/// Body of `POST /job-list`. Every field is required.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobDto {
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

impl Validate for CreateJobDto {
    fn validate(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            issues.push(ValidationIssue::new(
                "title",
                "required",
                "title must not be blank",
            ));
        } else if title.chars().count() > TITLE_MAX_CHARS {
            issues.push(ValidationIssue::new(
                "title",
                "max_length",
                format!("title must be at most {TITLE_MAX_CHARS} characters"),
            ));
        }

        if self.vacancy < 1 {
            issues.push(ValidationIssue::new(
                "vacancy",
                "min",
                "vacancy must be at least 1",
            ));
        }

        issues
    }
}

impl From<CreateJobDto> for NewJob {
    fn from(dto: CreateJobDto) -> Self {
        NewJob {
            title: dto.title,
            location: dto.location,
            r#type: dto.r#type,
            department: dto.department,
            last_date: dto.last_date,
            job_description: dto.job_description,
            responsibilities: dto.responsibilities,
            requirements: dto.requirements,
            benefits: dto.benefits,
            vacancy: dto.vacancy,
            job_type: dto.job_type,
            working_days: dto.working_days,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: String,
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

impl From<JobsRow> for JobResponse {
    fn from(row: JobsRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            location: row.location,
            r#type: row.r#type,
            department: row.department,
            last_date: row.last_date,
            job_description: row.job_description,
            responsibilities: row.responsibilities.0,
            requirements: row.requirements.0,
            benefits: row.benefits.0,
            vacancy: row.vacancy,
            job_type: row.job_type,
            working_days: row.working_days,
        }
    }
}
