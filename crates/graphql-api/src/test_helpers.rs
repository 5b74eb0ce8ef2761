//! Test helpers.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use async_graphql::{Request, Response};
use jiff::Timestamp;
use serde_json::Value;
use tally_app::{
    auth::{AuthGate, MockAuthService, UserId},
    cache::{CachePolicy, MockCacheService},
    context::AppContext,
    domain::{
        items::{
            MockItemsService,
            records::{ItemId, ItemRecord},
        },
        stores::{
            MockStoresService,
            records::{StoreId, StoreRecord},
        },
    },
    health::MockHealthService,
    ids::ObjectId,
};

use crate::graphql::build_schema;

pub(crate) const TEST_TOKEN: &str = "test-token";

pub(crate) const TEST_STORE: StoreId = StoreId::from_object_id(ObjectId::from_bytes([2; 12]));

pub(crate) const TEST_ITEM: ItemId = ItemId::from_object_id(ObjectId::from_bytes([3; 12]));

pub(crate) const TEST_USER: UserId = UserId::from_object_id(ObjectId::from_bytes([1; 12]));

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer().never();

    auth
}

pub(crate) fn strict_stores_mock() -> MockStoresService {
    let mut stores = MockStoresService::new();

    stores.expect_list_stores().never();
    stores.expect_get_store().never();
    stores.expect_create_store().never();
    stores.expect_update_store().never();
    stores.expect_delete_store().never();

    stores
}

pub(crate) fn strict_items_mock() -> MockItemsService {
    let mut items = MockItemsService::new();

    items.expect_list_items().never();
    items.expect_get_item().never();
    items.expect_create_item().never();
    items.expect_update_item().never();

    items
}

pub(crate) fn strict_cache_mock() -> MockCacheService {
    let mut cache = MockCacheService::new();

    cache.expect_get().never();
    cache.expect_set().never();
    cache.expect_delete().never();
    cache.expect_ping().never();

    cache
}

fn strict_health_mock() -> MockHealthService {
    let mut health = MockHealthService::new();

    health.expect_check().never();

    health
}

/// Cache backed by a shared map, so reads observe earlier writes and deletes.
pub(crate) fn in_memory_cache() -> MockCacheService {
    let entries: Arc<Mutex<HashMap<String, String>>> = Arc::default();
    let mut cache = MockCacheService::new();

    let reads = Arc::clone(&entries);
    cache.expect_get().returning(move |key| {
        Ok(reads
            .lock()
            .ok()
            .and_then(|entries| entries.get(key).cloned()))
    });

    let writes = Arc::clone(&entries);
    cache.expect_set().returning(move |key, value| {
        if let Ok(mut entries) = writes.lock() {
            entries.insert(key.to_string(), value);
        }

        Ok(())
    });

    let deletes = Arc::clone(&entries);
    cache.expect_delete().returning(move |key| {
        if let Ok(mut entries) = deletes.lock() {
            entries.remove(key);
        }

        Ok(())
    });

    cache
}

/// Application context where every service call fails the test.
pub(crate) fn strict_app_context() -> AppContext {
    AppContext {
        stores: Arc::new(strict_stores_mock()),
        items: Arc::new(strict_items_mock()),
        cache: Arc::new(strict_cache_mock()),
        auth: Arc::new(strict_auth_mock()),
        health: Arc::new(strict_health_mock()),
        cache_policy: CachePolicy::default(),
    }
}

/// Gate whose token resolves to [`TEST_USER`].
pub(crate) fn authenticated_gate() -> AuthGate {
    authenticated_gate_for(TEST_USER)
}

pub(crate) fn authenticated_gate_for(user: UserId) -> AuthGate {
    let mut auth = MockAuthService::new();

    auth.expect_authenticate_bearer()
        .once()
        .withf(|token| token == TEST_TOKEN)
        .return_once(move |_| Ok(user));

    AuthGate::new(Some(TEST_TOKEN.to_string()), Arc::new(auth))
}

/// Gate for a request without an `Authorization` header.
pub(crate) fn anonymous_gate() -> AuthGate {
    AuthGate::new(None, Arc::new(strict_auth_mock()))
}

pub(crate) async fn execute(app: AppContext, gate: AuthGate, query: &str) -> Response {
    build_schema(app)
        .execute(Request::new(query).data(gate))
        .await
}

/// `data` of a response as JSON.
pub(crate) fn data(response: Response) -> serde_json::Result<Value> {
    response.data.into_json()
}

/// `extensions.code` of the first error, if any.
pub(crate) fn error_code(response: &Response) -> Option<String> {
    serde_json::to_value(response)
        .ok()?
        .pointer("/errors/0/extensions/code")?
        .as_str()
        .map(str::to_owned)
}

/// Message of the first error, if any.
pub(crate) fn error_message(response: &Response) -> Option<&str> {
    response.errors.first().map(|error| error.message.as_str())
}

pub(crate) fn make_store(id: StoreId, owner: UserId) -> StoreRecord {
    StoreRecord {
        id,
        name: "Toko Makmur".to_string(),
        description: "Neighbourhood grocery".to_string(),
        phone_number: "081234567890".to_string(),
        address: "Jl. Sudirman 10".to_string(),
        since: "2019".to_string(),
        user_id: owner,
    }
}

pub(crate) fn make_item(id: ItemId, store: StoreId) -> ItemRecord {
    ItemRecord {
        id,
        name: "Pepsi".to_string(),
        image_url: "https://example.com/pepsi.png".to_string(),
        description: "Soft drink".to_string(),
        category: "Drink".to_string(),
        stock: 100,
        buy_price: 1000,
        sell_price: 1500,
        created_at: Timestamp::UNIX_EPOCH,
        expired_at: None,
        store_id: store,
        barcode: Some("123456789".to_string()),
    }
}
