//! Item mutations.

use async_graphql::{Context, ErrorExtensions, ID, Object, Result};
use tracing::info;

use tally_app::domain::{
    items::data::{ItemUpdate, NewItem},
    stores::records::StoreId,
};

use crate::{
    graphql::{ApiError, app, authenticate},
    items::{Item, errors::into_api_error},
    validation::{
        MISSING_REQUIRED_FIELDS, id_text, non_negative, parse_id, parse_timestamp, require,
    },
};

#[derive(Debug, Default)]
pub(crate) struct ItemsMutation;

/// Item fields shared by creation and update, as supplied by the client.
#[derive(Debug)]
struct ItemFields {
    name: String,
    image_url: String,
    description: String,
    category: String,
    stock: i32,
    buy_price: i32,
    sell_price: i32,
    store_id: ID,
    barcode: Option<String>,
}

/// Item fields after validation.
#[derive(Debug)]
struct CheckedItem {
    name: String,
    image_url: String,
    description: String,
    category: String,
    stock: i32,
    buy_price: i32,
    sell_price: i32,
    store_id: StoreId,
    barcode: Option<String>,
}

impl ItemFields {
    fn text_fields(&self) -> [Option<&str>; 5] {
        [
            Some(self.name.as_str()),
            Some(self.image_url.as_str()),
            Some(self.description.as_str()),
            Some(self.category.as_str()),
            id_text(Some(&self.store_id)),
        ]
    }

    fn check(self) -> Result<CheckedItem, ApiError> {
        Ok(CheckedItem {
            stock: non_negative("stock", self.stock)?,
            buy_price: non_negative("buyPrice", self.buy_price)?,
            sell_price: non_negative("sellPrice", self.sell_price)?,
            store_id: parse_id("storeId", &self.store_id)?,
            name: self.name,
            image_url: self.image_url,
            description: self.description,
            category: self.category,
            barcode: self.barcode,
        })
    }
}

#[Object]
impl ItemsMutation {
    /// Add an item to a store with its initial stock.
    #[expect(
        clippy::too_many_arguments,
        reason = "each argument is a field of the GraphQL mutation"
    )]
    async fn create_item(
        &self,
        ctx: &Context<'_>,
        name: String,
        image_url: String,
        description: String,
        category: String,
        stock: i32,
        buy_price: i32,
        sell_price: i32,
        created_at: String,
        store_id: ID,
        barcode: Option<String>,
    ) -> Result<Item> {
        let fields = ItemFields {
            name,
            image_url,
            description,
            category,
            stock,
            buy_price,
            sell_price,
            store_id,
            barcode,
        };

        create_item(ctx, fields, &created_at)
            .await
            .map_err(|error| error.extend())
    }

    /// Replace the mutable fields of an item. `null` when there is no such item.
    #[expect(
        clippy::too_many_arguments,
        reason = "each argument is a field of the GraphQL mutation"
    )]
    async fn update_item(
        &self,
        ctx: &Context<'_>,
        id: ID,
        name: String,
        image_url: String,
        description: String,
        category: String,
        stock: i32,
        buy_price: i32,
        sell_price: i32,
        store_id: ID,
        barcode: Option<String>,
    ) -> Result<Option<Item>> {
        let fields = ItemFields {
            name,
            image_url,
            description,
            category,
            stock,
            buy_price,
            sell_price,
            store_id,
            barcode,
        };

        update_item(ctx, &id, fields)
            .await
            .map_err(|error| error.extend())
    }
}

async fn create_item(
    ctx: &Context<'_>,
    fields: ItemFields,
    created_at: &str,
) -> Result<Item, ApiError> {
    authenticate(ctx).await?;

    require(
        fields.text_fields().into_iter().chain([Some(created_at)]),
        MISSING_REQUIRED_FIELDS,
    )?;

    let created_at = parse_timestamp("createdAt", created_at)?;
    let item = fields.check()?;

    let created = app(ctx)?
        .items
        .create_item(NewItem {
            name: item.name,
            image_url: item.image_url,
            description: item.description,
            category: item.category,
            stock: item.stock,
            buy_price: item.buy_price,
            sell_price: item.sell_price,
            created_at,
            store_id: item.store_id,
            barcode: item.barcode,
        })
        .await
        .map_err(into_api_error)?;

    info!(item = %created.id, store = %created.store_id, stock = created.stock, "item created");

    Ok(created.into())
}

async fn update_item(
    ctx: &Context<'_>,
    id: &ID,
    fields: ItemFields,
) -> Result<Option<Item>, ApiError> {
    authenticate(ctx).await?;

    require(
        fields.text_fields().into_iter().chain([id_text(Some(id))]),
        MISSING_REQUIRED_FIELDS,
    )?;

    let item_id = parse_id("id", id)?;
    let item = fields.check()?;

    Ok(app(ctx)?
        .items
        .update_item(
            item_id,
            ItemUpdate {
                name: item.name,
                image_url: item.image_url,
                description: item.description,
                category: item.category,
                stock: item.stock,
                buy_price: item.buy_price,
                sell_price: item.sell_price,
                store_id: item.store_id,
                barcode: item.barcode,
            },
        )
        .await
        .map_err(into_api_error)?
        .map(Item::from))
}
