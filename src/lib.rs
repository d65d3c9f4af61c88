pub mod accounts;
pub mod api;
pub mod approval;
pub mod booking;
pub mod chatbot;
pub mod config;
pub mod core_state;
pub mod crypto;
pub mod db;
pub mod directory;
pub mod education;
pub mod error;
pub mod models;
pub mod phrases;
pub mod records;
pub mod seed;
pub mod session;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::education::{EducationSource, NphilSource, NPHIL_URL};
use crate::models::EntityKind;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Cannot create data directory: {0}")]
    DataDir(std::io::Error),
    #[error("Cannot start async runtime: {0}")]
    Runtime(std::io::Error),
    #[error("Cannot build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error(transparent)]
    Database(#[from] db::DatabaseError),
    #[error(transparent)]
    Core(#[from] core_state::CoreError),
    #[error(transparent)]
    Server(#[from] api::server::ServerError),
}

pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let result = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(StartupError::Runtime)
        .and_then(|runtime| runtime.block_on(start()));

    if let Err(e) = result {
        tracing::error!("{} failed: {e}", config::APP_NAME);
        std::process::exit(1);
    }
}

async fn start() -> Result<(), StartupError> {
    let db_path = config::database_path();
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(StartupError::DataDir)?;
    }
    let conn = db::open_database(&db_path)?;
    tracing::info!(path = %db_path.display(), "Database ready");

    let importer = NphilSource::new(NPHIL_URL)?;
    let scraped = if db::count_entities(&conn, EntityKind::HealthEducation)? == 0 {
        importer.fetch().await
    } else {
        Vec::new()
    };
    seed::seed_baseline(&conn, &scraped)?;

    let core = Arc::new(core_state::CoreState::with_defaults(conn, importer));
    api::serve(core, config::bind_address(), shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
