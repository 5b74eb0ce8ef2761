//! Database connection management

use mongodb::{Client, Collection, Database, bson::doc};

use crate::domain::{items::records::ItemRecord, stores::records::StoreRecord};

/// Database used outside of tests.
pub const PRIMARY_DATABASE: &str = "final-project";

/// Database used when running with [`AppEnv::Test`].
pub const TEST_DATABASE: &str = "final-project-test";

pub const STORES_COLLECTION: &str = "stores";
pub const ITEMS_COLLECTION: &str = "items";

/// Execution mode, used to keep test data out of the primary database.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum AppEnv {
    Production,
    #[default]
    Development,
    Test,
}

impl AppEnv {
    #[must_use]
    pub const fn database_name(self) -> &'static str {
        match self {
            Self::Production | Self::Development => PRIMARY_DATABASE,
            Self::Test => TEST_DATABASE,
        }
    }
}

/// Shared handle to the selected database. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Db {
    client: Client,
    database: Database,
}

impl Db {
    #[must_use]
    pub fn new(client: Client, database_name: &str) -> Self {
        let database = client.database(database_name);

        Self { client, database }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.database.name()
    }

    #[must_use]
    pub fn database(&self) -> &Database {
        &self.database
    }

    pub(crate) fn stores(&self) -> Collection<StoreRecord> {
        self.database.collection(STORES_COLLECTION)
    }

    pub(crate) fn items(&self) -> Collection<ItemRecord> {
        self.database.collection(ITEMS_COLLECTION)
    }

    /// Round-trip a `ping` command.
    ///
    /// # Errors
    ///
    /// Returns an error when the server cannot be reached.
    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.database.run_command(doc! { "ping": 1 }).await?;

        Ok(())
    }

    /// Close every pooled connection. Outstanding handles stop working afterwards.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

/// Connect to MongoDB.
///
/// # Errors
///
/// Returns an error if the connection string is invalid.
pub async fn connect(uri: &str, database_name: &str) -> Result<Db, mongodb::error::Error> {
    let client = Client::with_uri_str(uri).await?;

    Ok(Db::new(client, database_name))
}
