use thiserror::Error;

/// Errors that can occur while configuring or creating the database pool.
#[derive(Debug, Error)]
pub enum DbConnectionError {
    #[error("database url cannot be empty")]
    EmptyDatabaseUrl,
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error("file/directory creation error: {0}")]
    FileCreation(String),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}
