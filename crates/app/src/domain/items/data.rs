//! Item Data

use jiff::Timestamp;

use crate::domain::stores::records::StoreId;

/// New Item Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub image_url: String,
    pub description: String,
    pub category: String,
    pub stock: i32,
    pub buy_price: i32,
    pub sell_price: i32,
    pub created_at: Timestamp,
    pub store_id: StoreId,
    pub barcode: Option<String>,
}

/// Item Update Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemUpdate {
    pub name: String,
    pub image_url: String,
    pub description: String,
    pub category: String,
    pub stock: i32,
    pub buy_price: i32,
    pub sell_price: i32,
    pub store_id: StoreId,
    pub barcode: Option<String>,
}
