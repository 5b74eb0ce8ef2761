//! Database Config

use clap::Args;
use tally_app::database::AppEnv;

/// Database settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `MongoDB` connection string
    #[arg(long, env = "MONGODB_URI", hide_env_values = true)]
    pub mongodb_uri: String,

    /// Execution mode (production, development, test); selects the database
    #[arg(long, env = "APP_ENV", value_enum, default_value_t = AppEnv::Development)]
    pub app_env: AppEnv,

    /// Explicit database name, overriding the one chosen by `APP_ENV`
    #[arg(long, env = "MONGODB_DATABASE")]
    pub mongodb_database: Option<String>,
}

impl DatabaseConfig {
    /// Name of the database to open.
    #[must_use]
    pub fn database_name(&self) -> &str {
        self.mongodb_database
            .as_deref()
            .unwrap_or_else(|| self.app_env.database_name())
    }
}
