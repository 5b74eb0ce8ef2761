//! Cache errors.

use redis::RedisError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache error")]
    Redis(#[from] RedisError),
}
