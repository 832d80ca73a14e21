//! Careers backend server
//!
//! Loads configuration, prepares the database, and serves the job-postings API
//! until Ctrl-C or SIGTERM.

use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use careers_backend::service::JobService;
use careers_backend::state::AppState;
use careers_backend::store::SqlJobStore;
use careers_db_connection::utils::sanitize_database_url;

mod cli;
mod config_helpers;
mod tracing_setup;

use cli::CliArgs;
use config_helpers::{database_config_from_config, parse_bind_address};
use tracing_setup::install_tracing_from_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let config = load_config(args.config_path.as_deref())?;
    careers_config::validate_config(&config)
        .map_err(|e| anyhow::anyhow!("invalid configuration: {e}"))?;

    install_tracing_from_config(&config.logging)?;
    tracing::info!(config_path = ?args.config_path, "configuration loaded");

    let db_cfg = database_config_from_config(&config)?;
    let db_pool = careers_db::create_pool_with_logging(&db_cfg).await?;
    run_migrations(&db_cfg, &db_pool).await?;

    tracing::info!(
        db_url = %sanitize_database_url(&db_cfg.url),
        db_max_connections = db_cfg.max_connections,
        "database ready"
    );

    let store = SqlJobStore::new(db_pool.clone());
    let state = Arc::new(AppState::new(JobService::new(Arc::new(store))));
    let app = careers_backend::build_router(state, &config.server.api_root);

    let addr = parse_bind_address(&config.server.host, config.server.port);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, api_root = %config.server.api_root, "server listening");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped, closing database pool");
    db_pool.close().await;
    Ok(())
}

/// Load configuration from file or defaults.
fn load_config(path: Option<&str>) -> anyhow::Result<careers_config::Config> {
    careers_config::load_config(path)
        .map_err(|e| anyhow::anyhow!("failed to load configuration: {e}"))
}

/// Run the embedded migrations for the compiled backend.
async fn run_migrations(
    db_cfg: &careers_db::DbConnectionConfig,
    db_pool: &careers_db::DbPool,
) -> anyhow::Result<()> {
    let url = sanitize_database_url(&db_cfg.url);
    tracing::info!(db_url = %url, driver = careers_db::DRIVER, "applying database migrations");

    match careers_db::migrator().run(db_pool).await {
        Ok(()) => {
            tracing::info!("database migrations applied successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!(%e, "failed to apply database migrations");
            Err(anyhow::anyhow!("failed to apply database migrations: {e}"))
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(%e, "failed to listen for ctrl+c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!(%e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("received ctrl+c interrupt, closing server");
        }
        _ = terminate => {
            tracing::info!("received SIGTERM, closing server");
        }
    }
}
