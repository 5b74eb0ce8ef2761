//! Stores Repository

use futures_util::TryStreamExt;
use mongodb::{
    Collection,
    bson::{Document, doc},
    options::ReturnDocument,
};

use crate::{
    auth::UserId,
    domain::stores::{
        data::StoreUpdate,
        records::{StoreId, StoreRecord},
    },
};

#[derive(Debug, Clone)]
pub(crate) struct MongoStoresRepository {
    collection: Collection<StoreRecord>,
}

impl MongoStoresRepository {
    #[must_use]
    pub(crate) fn new(collection: Collection<StoreRecord>) -> Self {
        Self { collection }
    }

    pub(crate) async fn list_stores(
        &self,
        owner: UserId,
    ) -> Result<Vec<StoreRecord>, mongodb::error::Error> {
        self.collection
            .find(owner_filter(owner))
            .await?
            .try_collect()
            .await
    }

    pub(crate) async fn get_store(
        &self,
        owner: UserId,
        store: StoreId,
    ) -> Result<Option<StoreRecord>, mongodb::error::Error> {
        self.collection.find_one(store_filter(owner, store)).await
    }

    pub(crate) async fn insert_store(
        &self,
        store: &StoreRecord,
    ) -> Result<(), mongodb::error::Error> {
        self.collection.insert_one(store).await?;

        Ok(())
    }

    pub(crate) async fn update_store(
        &self,
        owner: UserId,
        store: StoreId,
        update: StoreUpdate,
    ) -> Result<Option<StoreRecord>, mongodb::error::Error> {
        self.collection
            .find_one_and_update(store_filter(owner, store), update_document(update))
            .return_document(ReturnDocument::After)
            .await
    }

    pub(crate) async fn delete_store(
        &self,
        owner: UserId,
        store: StoreId,
    ) -> Result<u64, mongodb::error::Error> {
        let result = self
            .collection
            .delete_one(store_filter(owner, store))
            .await?;

        Ok(result.deleted_count)
    }
}

pub(crate) fn owner_filter(owner: UserId) -> Document {
    doc! { "userId": owner }
}

pub(crate) fn store_filter(owner: UserId, store: StoreId) -> Document {
    doc! { "_id": store, "userId": owner }
}

pub(crate) fn update_document(update: StoreUpdate) -> Document {
    doc! {
        "$set": {
            "name": update.name,
            "description": update.description,
            "phoneNumber": update.phone_number,
            "address": update.address,
            "since": update.since,
        }
    }
}

#[cfg(test)]
mod tests {
    use mongodb::bson::Bson;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn store_filter_scopes_by_owner() -> TestResult {
        let owner = UserId::new();
        let store = StoreId::new();

        let filter = store_filter(owner, store);

        assert_eq!(filter.get_object_id("_id")?, store.into_object_id());
        assert_eq!(filter.get_object_id("userId")?, owner.into_object_id());
        assert_eq!(filter.len(), 2);

        Ok(())
    }

    #[test]
    fn update_document_never_touches_owner() -> TestResult {
        let update = update_document(StoreUpdate {
            name: "Warung Jaya".to_string(),
            description: "Corner shop".to_string(),
            phone_number: "0812".to_string(),
            address: "Jl. Merdeka 1".to_string(),
            since: "2020".to_string(),
        });

        let set = update.get_document("$set")?;

        assert_eq!(set.get("name"), Some(&Bson::String("Warung Jaya".to_string())));
        assert_eq!(set.get("phoneNumber"), Some(&Bson::String("0812".to_string())));
        assert!(set.get("userId").is_none(), "owner must not be writable");
        assert!(set.get("_id").is_none(), "id must not be writable");

        Ok(())
    }
}
