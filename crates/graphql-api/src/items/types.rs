//! Item GraphQL types.

use async_graphql::{ID, SimpleObject};

use tally_app::domain::items::records::ItemRecord;

/// An item held by a store.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub(crate) struct Item {
    #[graphql(name = "_id")]
    pub id: ID,

    pub name: String,

    pub image_url: String,

    pub description: String,

    pub category: String,

    pub stock: i32,

    pub buy_price: i32,

    pub sell_price: i32,

    /// RFC 3339 creation time.
    pub created_at: String,

    pub store_id: ID,

    pub barcode: Option<String>,
}

impl From<ItemRecord> for Item {
    fn from(item: ItemRecord) -> Self {
        Self {
            id: ID(item.id.to_hex()),
            name: item.name,
            image_url: item.image_url,
            description: item.description,
            category: item.category,
            stock: item.stock,
            buy_price: item.buy_price,
            sell_price: item.sell_price,
            created_at: item.created_at.to_string(),
            store_id: ID(item.store_id.to_hex()),
            barcode: item.barcode,
        }
    }
}
