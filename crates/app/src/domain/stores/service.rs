//! Stores service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    auth::UserId,
    database::Db,
    domain::stores::{
        data::{NewStore, StoreUpdate},
        errors::StoresServiceError,
        records::{StoreId, StoreRecord},
        repository::MongoStoresRepository,
    },
};

#[derive(Debug, Clone)]
pub struct MongoStoresService {
    repository: MongoStoresRepository,
}

impl MongoStoresService {
    #[must_use]
    pub fn new(db: &Db) -> Self {
        Self {
            repository: MongoStoresRepository::new(db.stores()),
        }
    }
}

#[async_trait]
impl StoresService for MongoStoresService {
    async fn list_stores(&self, owner: UserId) -> Result<Vec<StoreRecord>, StoresServiceError> {
        Ok(self.repository.list_stores(owner).await?)
    }

    async fn get_store(
        &self,
        owner: UserId,
        store: StoreId,
    ) -> Result<Option<StoreRecord>, StoresServiceError> {
        Ok(self.repository.get_store(owner, store).await?)
    }

    async fn create_store(
        &self,
        owner: UserId,
        store: NewStore,
    ) -> Result<StoreRecord, StoresServiceError> {
        let record = StoreRecord {
            id: StoreId::new(),
            name: store.name,
            description: store.description,
            phone_number: store.phone_number,
            address: store.address,
            since: store.since,
            user_id: owner,
        };

        self.repository.insert_store(&record).await?;

        Ok(record)
    }

    async fn update_store(
        &self,
        owner: UserId,
        store: StoreId,
        update: StoreUpdate,
    ) -> Result<Option<StoreRecord>, StoresServiceError> {
        Ok(self.repository.update_store(owner, store, update).await?)
    }

    async fn delete_store(&self, owner: UserId, store: StoreId) -> Result<(), StoresServiceError> {
        let deleted = self.repository.delete_store(owner, store).await?;

        if deleted == 0 {
            return Err(StoresServiceError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait StoresService: Send + Sync {
    /// Retrieves every store owned by `owner`.
    async fn list_stores(&self, owner: UserId) -> Result<Vec<StoreRecord>, StoresServiceError>;

    /// Retrieves a single store, or `None` when it does not exist or belongs to someone else.
    async fn get_store(
        &self,
        owner: UserId,
        store: StoreId,
    ) -> Result<Option<StoreRecord>, StoresServiceError>;

    /// Creates a store owned by `owner` and returns the record that was written.
    async fn create_store(
        &self,
        owner: UserId,
        store: NewStore,
    ) -> Result<StoreRecord, StoresServiceError>;

    /// Replaces the mutable fields of a store owned by `owner`.
    async fn update_store(
        &self,
        owner: UserId,
        store: StoreId,
        update: StoreUpdate,
    ) -> Result<Option<StoreRecord>, StoresServiceError>;

    /// Hard-deletes a store owned by `owner`. Items referencing it are left alone.
    async fn delete_store(&self, owner: UserId, store: StoreId) -> Result<(), StoresServiceError>;
}
