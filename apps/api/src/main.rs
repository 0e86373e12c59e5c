//! Rolebook API composition root.

#![forbid(unsafe_code)]

mod api_config;
mod api_router;
mod api_services;
mod dev_seed;
mod dto;
mod error;
mod handlers;
mod state;

use rolebook_core::AppError;
use tracing::info;

use crate::api_config::{ApiConfig, StorageBackend};
use crate::api_services::RepositorySet;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    api_config::init_tracing();

    let config = ApiConfig::load()?;

    let repositories = match &config.storage_backend {
        StorageBackend::Memory => {
            if config.migrate_only {
                return Err(AppError::Validation(
                    "the migrate command requires STORAGE_BACKEND=postgres".to_owned(),
                ));
            }

            RepositorySet::in_memory()
        }
        StorageBackend::Postgres(postgres_config) => {
            let pool = api_services::connect_and_migrate(postgres_config).await?;
            if config.migrate_only {
                info!("database migrations applied successfully");
                return Ok(());
            }

            RepositorySet::postgres(pool)
        }
    };

    let app_state = api_services::build_app_state(repositories, config.link_policy);

    if config.dev_seed_users {
        dev_seed::run(&app_state).await?;
    }

    let app = api_router::build_router(app_state);
    let address = config.socket_address()?;

    let listener = tokio::net::TcpListener::bind(address)
        .await
        .map_err(|error| AppError::Internal(format!("failed to bind listener: {error}")))?;

    info!(
        %address,
        storage = config.storage_backend.as_str(),
        link_policy = config.link_policy.as_str(),
        "rolebook-api listening"
    );

    axum::serve(listener, app)
        .await
        .map_err(|error| AppError::Internal(format!("api server error: {error}")))
}
