#[cfg(not(any(feature = "postgres", feature = "mysql", feature = "sqlite")))]
compile_error!(
    "Enable exactly one of the `postgres`, `mysql`, or `sqlite` features for careers-db."
);

#[cfg(any(
    all(feature = "postgres", feature = "mysql"),
    all(feature = "postgres", feature = "sqlite"),
    all(feature = "mysql", feature = "sqlite"),
))]
compile_error!(
    "Activate only one backend feature (`postgres`, `mysql`, or `sqlite`) for careers-db."
);

#[cfg(feature = "postgres")]
pub type DbBackend = sqlx::Postgres;
#[cfg(feature = "mysql")]
pub type DbBackend = sqlx::MySql;
#[cfg(feature = "sqlite")]
pub type DbBackend = sqlx::Sqlite;

/// Value of `database.driver` this build can talk to.
#[cfg(feature = "postgres")]
pub const DRIVER: &str = "postgres";
#[cfg(feature = "mysql")]
pub const DRIVER: &str = "mysql";
#[cfg(feature = "sqlite")]
pub const DRIVER: &str = "sqlite";

pub mod jobs;

/// Embedded migrations for the compiled backend.
pub fn migrator() -> &'static sqlx::migrate::Migrator {
    #[cfg(feature = "postgres")]
    {
        careers_migrations::postgres_migrator()
    }
    #[cfg(feature = "mysql")]
    {
        careers_migrations::mysql_migrator()
    }
    #[cfg(feature = "sqlite")]
    {
        careers_migrations::sqlite_migrator()
    }
}

pub use careers_db_connection::{
    create_pool, create_pool_with_logging, DbConnectionConfig, DbConnectionError, DbPool,
};

#[cfg(all(test, feature = "sqlite"))]
mod tests {
    use super::*;

    #[test]
    fn migrator_follows_compiled_backend() {
        assert_eq!(DRIVER, "sqlite");
        assert!(std::ptr::eq(migrator(), careers_migrations::sqlite_migrator()));
    }
}
