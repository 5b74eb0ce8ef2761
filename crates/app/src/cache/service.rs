//! Cache service.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    time::Duration,
};

use async_trait::async_trait;
use mockall::automock;
use redis::{AsyncCommands, aio::ConnectionManager};

use crate::cache::CacheError;

/// Default namespace for every key this service writes.
pub const DEFAULT_KEY_PREFIX: &str = "tally:";

/// Whether the store list may be served from the cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CachePolicy {
    /// Serve `getAllStores` from the cache when an entry exists. Writes always happen.
    pub read_through: bool,
}

#[derive(Clone)]
pub struct RedisCacheService {
    connection: ConnectionManager,
    prefix: String,
    ttl: Option<Duration>,
}

impl RedisCacheService {
    #[must_use]
    pub fn new(connection: ConnectionManager, ttl: Option<Duration>) -> Self {
        Self {
            connection,
            prefix: DEFAULT_KEY_PREFIX.to_string(),
            ttl,
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    fn prefixed(&self, key: &str) -> String {
        format!("{}{key}", self.prefix)
    }
}

impl Debug for RedisCacheService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("RedisCacheService")
            .field("prefix", &self.prefix)
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

/// Connect to Redis.
///
/// # Errors
///
/// Returns an error if the URL is invalid or the server cannot be reached.
pub async fn connect(redis_url: &str) -> Result<ConnectionManager, CacheError> {
    let client = redis::Client::open(redis_url)?;

    Ok(client.get_connection_manager().await?)
}

#[async_trait]
impl CacheService for RedisCacheService {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut connection = self.connection.clone();

        Ok(connection.get(self.prefixed(key)).await?)
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CacheError> {
        let mut connection = self.connection.clone();
        let key = self.prefixed(key);

        match self.ttl {
            Some(ttl) => connection.set_ex::<_, _, ()>(key, value, ttl.as_secs()).await?,
            None => connection.set::<_, _, ()>(key, value).await?,
        }

        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut connection = self.connection.clone();

        connection.del::<_, ()>(self.prefixed(key)).await?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), CacheError> {
        let mut connection = self.connection.clone();

        redis::cmd("PING")
            .query_async::<()>(&mut connection)
            .await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Reads a cached string payload.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Writes a string payload, replacing whatever was stored under `key`.
    async fn set(&self, key: &str, value: String) -> Result<(), CacheError>;

    /// Drops the entry under `key`. Missing keys are not an error.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Checks that the cache is reachable.
    async fn ping(&self) -> Result<(), CacheError>;
}
