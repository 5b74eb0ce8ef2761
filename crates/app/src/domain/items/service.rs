//! Items service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::{
        items::{
            data::{ItemUpdate, NewItem},
            errors::ItemsServiceError,
            records::{ItemId, ItemRecord},
            repository::MongoItemsRepository,
        },
        stores::records::StoreId,
    },
};

#[derive(Debug, Clone)]
pub struct MongoItemsService {
    repository: MongoItemsRepository,
}

impl MongoItemsService {
    #[must_use]
    pub fn new(db: &Db) -> Self {
        Self {
            repository: MongoItemsRepository::new(db.items()),
        }
    }
}

#[async_trait]
impl ItemsService for MongoItemsService {
    async fn list_items(
        &self,
        store: StoreId,
        search: Option<String>,
    ) -> Result<Vec<ItemRecord>, ItemsServiceError> {
        Ok(self
            .repository
            .list_items(store, search.as_deref())
            .await?)
    }

    async fn get_item(
        &self,
        store: StoreId,
        item: ItemId,
    ) -> Result<Option<ItemRecord>, ItemsServiceError> {
        Ok(self.repository.get_item(store, item).await?)
    }

    async fn create_item(&self, item: NewItem) -> Result<ItemRecord, ItemsServiceError> {
        let record = ItemRecord {
            id: ItemId::new(),
            name: item.name,
            image_url: item.image_url,
            description: item.description,
            category: item.category,
            stock: item.stock,
            buy_price: item.buy_price,
            sell_price: item.sell_price,
            created_at: item.created_at,
            expired_at: None,
            store_id: item.store_id,
            barcode: item.barcode,
        };

        self.repository.insert_item(&record).await?;

        self.repository
            .find_item(record.id)
            .await?
            .ok_or(ItemsServiceError::NotFound)
    }

    async fn update_item(
        &self,
        item: ItemId,
        update: ItemUpdate,
    ) -> Result<Option<ItemRecord>, ItemsServiceError> {
        Ok(self.repository.update_item(item, update).await?)
    }
}

/// Item access, addressed by store and item id.
///
/// Items carry no owner of their own and nothing here checks that the caller owns `store`:
/// any authenticated caller can reach items under any `storeId`.
#[automock]
#[async_trait]
pub trait ItemsService: Send + Sync {
    /// Retrieves the items of a store, optionally filtered by a case-insensitive name search.
    async fn list_items(
        &self,
        store: StoreId,
        search: Option<String>,
    ) -> Result<Vec<ItemRecord>, ItemsServiceError>;

    /// Retrieves a single item of a store.
    async fn get_item(
        &self,
        store: StoreId,
        item: ItemId,
    ) -> Result<Option<ItemRecord>, ItemsServiceError>;

    /// Inserts an item with its requested stock in a single write and returns it as stored.
    async fn create_item(&self, item: NewItem) -> Result<ItemRecord, ItemsServiceError>;

    /// Replaces the mutable fields of an item.
    async fn update_item(
        &self,
        item: ItemId,
        update: ItemUpdate,
    ) -> Result<Option<ItemRecord>, ItemsServiceError>;
}
