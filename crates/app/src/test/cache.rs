//! Redis test container.

use once_cell::sync::Lazy;
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::redis::{REDIS_PORT, Redis};
use tokio::sync::OnceCell;

use crate::cache::{self, RedisCacheService};

static REDIS_CONTAINER: Lazy<OnceCell<ContainerAsync<Redis>>> = Lazy::new(OnceCell::new);

async fn init_redis_container() -> ContainerAsync<Redis> {
    Redis::default()
        .start()
        .await
        .expect("Failed to start Redis container")
}

/// Cache service bound to a shared Redis container.
///
/// Every instance writes under its own key prefix so parallel tests never collide.
pub struct TestCache {
    pub service: RedisCacheService,
}

impl TestCache {
    pub async fn new() -> Self {
        let container = REDIS_CONTAINER.get_or_init(init_redis_container).await;

        let port = container
            .get_host_port_ipv4(REDIS_PORT)
            .await
            .expect("Failed to get container port");

        let host = std::env::var("TESTCONTAINERS_HOST_OVERRIDE")
            .unwrap_or_else(|_| "localhost".to_string());

        let connection = cache::connect(&format!("redis://{host}:{port}"))
            .await
            .expect("Failed to connect to Redis");

        let prefix = format!("test:{}:", mongodb::bson::oid::ObjectId::new().to_hex());

        Self {
            service: RedisCacheService::new(connection, None).with_prefix(prefix),
        }
    }
}
