//! Database test utilities and shared infrastructure

use mongodb::Client;
use once_cell::sync::Lazy;
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::mongo::Mongo;
use tokio::sync::{OnceCell, mpsc};

use crate::database::Db;

const MONGO_PORT: u16 = 27017;

/// Validates a database name against MongoDB's naming rules
///
/// Database names must:
/// - Be 1-63 characters long
/// - Not contain `/`, `\`, `.`, space, `"`, `$`, `*`, `<`, `>`, `:`, `|` or `?`
/// - Not be one of the server's reserved databases
fn validate_database_name(name: &str) -> Result<(), String> {
    if name.is_empty() || name.len() > 63 {
        return Err("Database name must be 1-63 characters long".to_string());
    }

    if name.chars().any(|c| {
        matches!(
            c,
            '/' | '\\' | '.' | ' ' | '"' | '$' | '*' | '<' | '>' | ':' | '|' | '?' | '\0'
        )
    }) {
        return Err("Database name contains a forbidden character".to_string());
    }

    if ["admin", "local", "config"]
        .iter()
        .any(|&reserved| name.eq_ignore_ascii_case(reserved))
    {
        return Err(format!("Database name '{name}' is reserved"));
    }

    Ok(())
}

/// Shared MongoDB container initialization
async fn init_mongo_container() -> ContainerAsync<Mongo> {
    Mongo::default()
        .start()
        .await
        .expect("Failed to start MongoDB container")
}

/// Shared MongoDB container that starts once and is reused across all tests
static MONGO_CONTAINER: Lazy<OnceCell<ContainerAsync<Mongo>>> = Lazy::new(OnceCell::new);

/// Cleanup channel for database cleanup requests
static CLEANUP_SENDER: Lazy<OnceCell<mpsc::UnboundedSender<String>>> = Lazy::new(OnceCell::new);

async fn init_cleanup_task() -> mpsc::UnboundedSender<String> {
    let (sender, mut receiver) = mpsc::unbounded_channel::<String>();

    tokio::spawn(async move {
        while let Some(db_name) = receiver.recv().await {
            if let Err(err) = cleanup_database(&db_name).await {
                eprintln!("Failed to cleanup database '{db_name}': {err}");
            }
        }
    });

    sender
}

async fn mongo_uri() -> String {
    let container = MONGO_CONTAINER.get_or_init(init_mongo_container).await;

    let port = container
        .get_host_port_ipv4(MONGO_PORT)
        .await
        .expect("Failed to get container port");

    let host =
        std::env::var("TESTCONTAINERS_HOST_OVERRIDE").unwrap_or_else(|_| "localhost".to_string());

    format!("mongodb://{host}:{port}/?directConnection=true")
}

/// Drop a test database by name.
async fn cleanup_database(db_name: &str) -> Result<(), mongodb::error::Error> {
    if MONGO_CONTAINER.get().is_none() || validate_database_name(db_name).is_err() {
        return Ok(());
    }

    let client = Client::with_uri_str(mongo_uri().await).await?;

    client.database(db_name).drop().await
}

/// Test database configuration
///
/// Each `TestDb` owns a uniquely named database inside a shared MongoDB container.
/// The database is dropped in the background when the `TestDb` goes out of scope.
#[derive(Debug)]
pub struct TestDb {
    pub db: Db,

    pub name: String,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        if let Some(sender) = CLEANUP_SENDER.get() {
            let _ = sender.send(self.name.clone());
        }
    }
}

impl TestDb {
    /// Create an isolated test database with a unique generated name.
    pub async fn new() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("system clock before unix epoch")
            .as_nanos();

        let thread_id = std::thread::current().id();

        let name = format!("tally_test_{nanos}_{thread_id:?}").replace([':', ' ', '(', ')'], "");

        Self::new_with_db_name(&name).await
    }

    pub async fn new_with_db_name(db_name: &str) -> Self {
        let _cleanup_sender = CLEANUP_SENDER.get_or_init(init_cleanup_task).await;

        if let Err(error) = validate_database_name(db_name) {
            panic!("Invalid database name '{db_name}': {error}");
        }

        let db = crate::database::connect(&mongo_uri().await, db_name)
            .await
            .expect("Failed to create MongoDB client");

        Self {
            db,
            name: db_name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_database_name_success() {
        assert!(validate_database_name("tally_test_1").is_ok());
        assert!(validate_database_name("final-project-test").is_ok());
    }

    #[test]
    fn test_validate_database_name_length() {
        assert!(validate_database_name("").is_err());
        assert!(validate_database_name(&"a".repeat(64)).is_err());
    }

    #[test]
    fn test_validate_database_name_forbidden_characters() {
        assert!(validate_database_name("has.dot").is_err());
        assert!(validate_database_name("has space").is_err());
        assert!(validate_database_name("has$dollar").is_err());
        assert!(validate_database_name("has/slash").is_err());
    }

    #[test]
    fn test_validate_database_name_reserved() {
        assert!(validate_database_name("admin").is_err());
        assert!(validate_database_name("LOCAL").is_err());
    }

    #[tokio::test]
    async fn test_container_startup() {
        let test_db = TestDb::new().await;

        test_db.db.ping().await.expect("Failed to ping test database");
    }
}
