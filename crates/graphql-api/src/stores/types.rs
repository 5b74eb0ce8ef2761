//! Store GraphQL types.

use async_graphql::{ID, SimpleObject};
use serde::{Deserialize, Serialize};

use tally_app::domain::stores::records::StoreRecord;

/// A store owned by the caller.
///
/// Also the shape of the cached store list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Store {
    #[graphql(name = "_id")]
    #[serde(rename = "_id")]
    pub id: ID,

    pub name: String,

    pub description: String,

    pub phone_number: String,

    pub address: String,

    pub since: String,

    pub user_id: ID,
}

impl From<StoreRecord> for Store {
    fn from(store: StoreRecord) -> Self {
        Self {
            id: ID(store.id.to_hex()),
            name: store.name,
            description: store.description,
            phone_number: store.phone_number,
            address: store.address,
            since: store.since,
            user_id: ID(store.user_id.to_hex()),
        }
    }
}

/// Confirmation returned by destructive mutations.
#[derive(Debug, Clone, PartialEq, Eq, SimpleObject)]
pub(crate) struct Message {
    pub message: String,
}
