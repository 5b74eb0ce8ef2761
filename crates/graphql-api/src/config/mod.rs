//! Server configuration module

use clap::Parser;
use tally_app::context::AppSettings;

use crate::config::{
    auth::AuthConfig, cache::CacheConfig, db::DatabaseConfig, observability::LoggingConfig,
    server::ServerRuntimeConfig,
};

pub(crate) mod auth;
pub(crate) mod cache;
pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Tally GraphQL API Server configuration
#[derive(Debug, Parser)]
#[command(name = "tally-graphql", about = "Tally GraphQL API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Store-list cache settings.
    #[command(flatten)]
    pub cache: CacheConfig,

    /// Bearer token verification settings.
    #[command(flatten)]
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }

    /// Settings used to assemble the application context.
    #[must_use]
    pub fn app_settings(&self) -> AppSettings {
        AppSettings {
            mongodb_uri: self.database.mongodb_uri.clone(),
            database_name: self.database.database_name().to_string(),
            redis_url: self.cache.redis_url.clone(),
            cache_ttl: self.cache.ttl(),
            cache_policy: self.cache.policy(),
            jwt_secret: self.auth.jwt_secret.clone(),
        }
    }
}
