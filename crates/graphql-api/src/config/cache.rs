//! Cache Config

use std::time::Duration;

use clap::Args;
use tally_app::cache::CachePolicy;

/// Store-list cache settings.
#[derive(Debug, Args)]
pub struct CacheConfig {
    /// Redis connection string
    #[arg(long, env = "REDIS_URL", hide_env_values = true)]
    pub redis_url: String,

    /// Expiry for cached entries in seconds (at least 1); entries never expire when unset
    #[arg(long, env = "CACHE_TTL_SECONDS", value_parser = clap::value_parser!(u64).range(1..))]
    pub cache_ttl_seconds: Option<u64>,

    /// Serve `getAllStores` from the cache when an entry exists
    #[arg(long, env = "CACHE_READ_THROUGH", default_value_t = false)]
    pub cache_read_through: bool,
}

impl CacheConfig {
    #[must_use]
    pub fn ttl(&self) -> Option<Duration> {
        self.cache_ttl_seconds.map(Duration::from_secs)
    }

    #[must_use]
    pub fn policy(&self) -> CachePolicy {
        CachePolicy {
            read_through: self.cache_read_through,
        }
    }
}
