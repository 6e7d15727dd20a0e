use crate::application::ports::repositories::Repository;
use crate::application::services::{SubscriptionService, UserService};
use crate::infrastructure::database::{ConnectionPool, SqliteRepository};
use crate::shared::config::AppConfig;
use crate::shared::error::AppError;
use crate::shared::logging;
use std::sync::Arc;
use tracing::info;

/// Wires storage and services together.
#[derive(Clone)]
pub struct AppState {
    pub pool: ConnectionPool,
    pub repository: Arc<SqliteRepository>,
    pub user_service: Arc<UserService>,
    pub subscription_service: Arc<SubscriptionService>,
}

impl AppState {
    pub async fn initialize(config: &AppConfig) -> Result<Self, AppError> {
        config.validate()?;
        logging::init(&config.logging);
        let pool = ConnectionPool::with_config(&config.database).await?;
        Self::from_pool(pool).await
    }

    /// Runs migrations on `pool` and builds the services on top of it.
    pub async fn from_pool(pool: ConnectionPool) -> Result<Self, AppError> {
        let repository = Arc::new(SqliteRepository::new(pool.clone()));
        repository.initialize().await?;
        info!("database migrations completed");

        let user_service = Arc::new(UserService::new(repository.clone()));
        let subscription_service = Arc::new(SubscriptionService::new(
            repository.clone(),
            repository.clone(),
        ));

        Ok(Self {
            pool,
            repository,
            user_service,
            subscription_service,
        })
    }

    pub async fn health_check(&self) -> Result<bool, AppError> {
        self.repository.health_check().await
    }

    pub async fn shutdown(&self) {
        self.pool.close().await;
    }
}
