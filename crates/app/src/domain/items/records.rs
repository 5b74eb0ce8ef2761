//! Item Records

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{domain::stores::records::StoreId, ids::TypedId};

/// Item Id
pub type ItemId = TypedId<ItemRecord>;

/// Item document as persisted in the `items` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRecord {
    #[serde(rename = "_id")]
    pub id: ItemId,

    pub name: String,

    pub image_url: String,

    pub description: String,

    pub category: String,

    /// Quantity on hand.
    pub stock: i32,

    pub buy_price: i32,

    pub sell_price: i32,

    #[serde(with = "bson_timestamp")]
    pub created_at: Timestamp,

    /// Only present on legacy documents; never written by the API.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "bson_timestamp::option"
    )]
    pub expired_at: Option<Timestamp>,

    pub store_id: StoreId,

    #[serde(default)]
    pub barcode: Option<String>,
}

/// Stores `jiff` timestamps as native BSON dates.
pub(crate) mod bson_timestamp {
    use jiff::Timestamp;
    use mongodb::bson::DateTime;
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

    pub(crate) fn to_bson(timestamp: Timestamp) -> DateTime {
        DateTime::from_millis(timestamp.as_millisecond())
    }

    pub(crate) fn from_bson(value: DateTime) -> Result<Timestamp, jiff::Error> {
        Timestamp::from_millisecond(value.timestamp_millis())
    }

    pub(crate) fn serialize<S: Serializer>(
        timestamp: &Timestamp,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        to_bson(*timestamp).serialize(serializer)
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Timestamp, D::Error> {
        from_bson(DateTime::deserialize(deserializer)?).map_err(D::Error::custom)
    }

    pub(crate) mod option {
        use jiff::Timestamp;
        use mongodb::bson::DateTime;
        use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

        pub(crate) fn serialize<S: Serializer>(
            timestamp: &Option<Timestamp>,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            timestamp.map(super::to_bson).serialize(serializer)
        }

        pub(crate) fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<Timestamp>, D::Error> {
            Option::<DateTime>::deserialize(deserializer)?
                .map(super::from_bson)
                .transpose()
                .map_err(D::Error::custom)
        }
    }
}
