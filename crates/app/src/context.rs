//! App Context

use std::{sync::Arc, time::Duration};

use thiserror::Error;

use crate::{
    auth::{AuthService, JwtAuthService},
    cache::{self, CacheError, CachePolicy, CacheService, RedisCacheService},
    database::{self, Db},
    domain::{
        items::{ItemsService, MongoItemsService},
        stores::{MongoStoresService, StoresService},
    },
    health::{AppHealthService, HealthService},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] mongodb::error::Error),

    #[error("failed to connect to cache")]
    Cache(#[source] CacheError),
}

/// Connection and behaviour settings needed to assemble an [`AppContext`].
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub mongodb_uri: String,
    pub database_name: String,
    pub redis_url: String,
    pub cache_ttl: Option<Duration>,
    pub cache_policy: CachePolicy,
    pub jwt_secret: String,
}

#[derive(Clone)]
pub struct AppContext {
    pub stores: Arc<dyn StoresService>,
    pub items: Arc<dyn ItemsService>,
    pub cache: Arc<dyn CacheService>,
    pub auth: Arc<dyn AuthService>,
    pub health: Arc<dyn HealthService>,
    pub cache_policy: CachePolicy,
}

impl AppContext {
    /// Build application context from connection settings.
    ///
    /// The database handle is returned alongside so the caller can close it on shutdown.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing the database or cache connection fails.
    pub async fn from_settings(settings: AppSettings) -> Result<(Self, Db), AppInitError> {
        let db = database::connect(&settings.mongodb_uri, &settings.database_name)
            .await
            .map_err(AppInitError::Database)?;

        let connection = cache::connect(&settings.redis_url)
            .await
            .map_err(AppInitError::Cache)?;

        let cache: Arc<dyn CacheService> =
            Arc::new(RedisCacheService::new(connection, settings.cache_ttl));

        let context = Self {
            stores: Arc::new(MongoStoresService::new(&db)),
            items: Arc::new(MongoItemsService::new(&db)),
            auth: Arc::new(JwtAuthService::new(&settings.jwt_secret)),
            health: Arc::new(AppHealthService::new(db.clone(), Arc::clone(&cache))),
            cache,
            cache_policy: settings.cache_policy,
        };

        Ok((context, db))
    }
}
