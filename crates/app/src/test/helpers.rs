//! Test Helpers

use jiff::Timestamp;

use crate::domain::{
    items::data::NewItem,
    stores::{data::NewStore, records::StoreId},
};

pub(crate) fn new_store(name: &str) -> NewStore {
    NewStore {
        name: name.to_string(),
        description: "Neighbourhood grocery".to_string(),
        phone_number: "081234567890".to_string(),
        address: "Jl. Sudirman 10".to_string(),
        since: "2019".to_string(),
    }
}

pub(crate) fn new_item(store: StoreId, name: &str, stock: i32) -> NewItem {
    NewItem {
        name: name.to_string(),
        image_url: "https://example.com/item.png".to_string(),
        description: format!("{name} description"),
        category: "Drink".to_string(),
        stock,
        buy_price: 1000,
        sell_price: 1500,
        created_at: Timestamp::now(),
        store_id: store,
        barcode: None,
    }
}
