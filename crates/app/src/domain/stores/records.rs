//! Store Records

use serde::{Deserialize, Serialize};

use crate::{auth::UserId, ids::TypedId};

/// Store Id
pub type StoreId = TypedId<StoreRecord>;

/// Store document as persisted in the `stores` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreRecord {
    #[serde(rename = "_id")]
    pub id: StoreId,

    pub name: String,

    pub description: String,

    pub phone_number: String,

    pub address: String,

    /// Free-form founding date, kept as the caller supplied it.
    pub since: String,

    /// Owner of the store. Always the caller that created it.
    pub user_id: UserId,
}
