//! Dependency health checks.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use tracing::warn;

use crate::{cache::CacheService, database::Db};

/// Reachability of each backing service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthReport {
    pub database: bool,
    pub cache: bool,
}

impl HealthReport {
    #[must_use]
    pub const fn is_healthy(self) -> bool {
        self.database && self.cache
    }
}

#[derive(Clone)]
pub struct AppHealthService {
    db: Db,
    cache: Arc<dyn CacheService>,
}

impl AppHealthService {
    #[must_use]
    pub fn new(db: Db, cache: Arc<dyn CacheService>) -> Self {
        Self { db, cache }
    }
}

#[async_trait]
impl HealthService for AppHealthService {
    async fn check(&self) -> HealthReport {
        let database = match self.db.ping().await {
            Ok(()) => true,
            Err(error) => {
                warn!("database ping failed: {error}");
                false
            }
        };

        let cache = match self.cache.ping().await {
            Ok(()) => true,
            Err(error) => {
                warn!("cache ping failed: {error}");
                false
            }
        };

        HealthReport { database, cache }
    }
}

#[automock]
#[async_trait]
pub trait HealthService: Send + Sync {
    /// Pings every backing service.
    async fn check(&self) -> HealthReport;
}
