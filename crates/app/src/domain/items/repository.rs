//! Items Repository

use futures_util::TryStreamExt;
use mongodb::{
    Collection,
    bson::{Bson, Document, doc},
    options::ReturnDocument,
};

use crate::domain::{
    items::{
        data::ItemUpdate,
        records::{ItemId, ItemRecord},
    },
    stores::records::StoreId,
};

#[derive(Debug, Clone)]
pub(crate) struct MongoItemsRepository {
    collection: Collection<ItemRecord>,
}

impl MongoItemsRepository {
    #[must_use]
    pub(crate) fn new(collection: Collection<ItemRecord>) -> Self {
        Self { collection }
    }

    pub(crate) async fn list_items(
        &self,
        store: StoreId,
        search: Option<&str>,
    ) -> Result<Vec<ItemRecord>, mongodb::error::Error> {
        self.collection
            .find(list_filter(store, search))
            .await?
            .try_collect()
            .await
    }

    pub(crate) async fn get_item(
        &self,
        store: StoreId,
        item: ItemId,
    ) -> Result<Option<ItemRecord>, mongodb::error::Error> {
        self.collection
            .find_one(doc! { "_id": item, "storeId": store })
            .await
    }

    pub(crate) async fn find_item(
        &self,
        item: ItemId,
    ) -> Result<Option<ItemRecord>, mongodb::error::Error> {
        self.collection.find_one(doc! { "_id": item }).await
    }

    pub(crate) async fn insert_item(&self, item: &ItemRecord) -> Result<(), mongodb::error::Error> {
        self.collection.insert_one(item).await?;

        Ok(())
    }

    pub(crate) async fn update_item(
        &self,
        item: ItemId,
        update: ItemUpdate,
    ) -> Result<Option<ItemRecord>, mongodb::error::Error> {
        self.collection
            .find_one_and_update(doc! { "_id": item }, update_document(update))
            .return_document(ReturnDocument::After)
            .await
    }
}

/// Items of `store`, optionally narrowed to names containing `search` (case-insensitive).
///
/// The search text is matched literally.
pub(crate) fn list_filter(store: StoreId, search: Option<&str>) -> Document {
    let mut filter = doc! { "storeId": store };

    if let Some(search) = search.filter(|search| !search.is_empty()) {
        filter.insert(
            "name",
            doc! { "$regex": regex::escape(search), "$options": "i" },
        );
    }

    filter
}

pub(crate) fn update_document(update: ItemUpdate) -> Document {
    doc! {
        "$set": {
            "name": update.name,
            "imageUrl": update.image_url,
            "description": update.description,
            "category": update.category,
            "stock": update.stock,
            "buyPrice": update.buy_price,
            "sellPrice": update.sell_price,
            "storeId": update.store_id,
            "barcode": update.barcode.map_or(Bson::Null, Bson::String),
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn list_filter_without_search_matches_store_only() {
        let store = StoreId::new();

        let filter = list_filter(store, None);

        assert_eq!(filter, doc! { "storeId": store.into_object_id() });
    }

    #[test]
    fn list_filter_treats_empty_search_as_absent() {
        let store = StoreId::new();

        assert_eq!(list_filter(store, Some("")), list_filter(store, None));
    }

    #[test]
    fn list_filter_adds_case_insensitive_name_match() -> TestResult {
        let store = StoreId::new();

        let filter = list_filter(store, Some("pep"));
        let name = filter.get_document("name")?;

        assert_eq!(name.get_str("$regex")?, "pep");
        assert_eq!(name.get_str("$options")?, "i");

        Ok(())
    }

    #[test]
    fn list_filter_escapes_regex_metacharacters() -> TestResult {
        let filter = list_filter(StoreId::new(), Some("7.5% (can)"));

        assert_eq!(
            filter.get_document("name")?.get_str("$regex")?,
            r"7\.5% \(can\)"
        );

        Ok(())
    }

    #[test]
    fn update_document_clears_missing_barcode() -> TestResult {
        let update = update_document(ItemUpdate {
            name: "Pepsi".to_string(),
            image_url: "https://example.com/pepsi.png".to_string(),
            description: "Soft drink".to_string(),
            category: "Drink".to_string(),
            stock: 0,
            buy_price: 1000,
            sell_price: 1500,
            store_id: StoreId::new(),
            barcode: None,
        });

        let set = update.get_document("$set")?;

        assert_eq!(set.get("barcode"), Some(&Bson::Null));
        assert_eq!(set.get_i32("stock")?, 0);
        assert!(set.get("createdAt").is_none(), "creation date is immutable");

        Ok(())
    }
}
