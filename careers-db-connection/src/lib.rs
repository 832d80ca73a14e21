pub mod config;
pub mod error;
pub mod pool;
pub mod utils;

pub use config::DbConnectionConfig;
pub use error::DbConnectionError;
pub use pool::{create_pool, create_pool_with_logging, DbPool};
