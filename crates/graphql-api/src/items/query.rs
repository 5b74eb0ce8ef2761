//! Item queries.

use async_graphql::{Context, ErrorExtensions, ID, Object, Result};

use crate::{
    graphql::{ApiError, app, authenticate},
    items::{Item, errors::into_api_error},
    validation::{
        MISSING_STORE_AND_PRODUCT_ID, MISSING_STORE_ID, id_text, parse_id, require, require_id,
    },
};

#[derive(Debug, Default)]
pub(crate) struct ItemsQuery;

#[Object]
impl ItemsQuery {
    /// Items of a store, optionally narrowed to names containing `search`.
    async fn get_all_items(
        &self,
        ctx: &Context<'_>,
        store_id: ID,
        search: Option<String>,
    ) -> Result<Vec<Item>> {
        get_all_items(ctx, &store_id, search)
            .await
            .map_err(|error| error.extend())
    }

    /// An item of a store, or `null`.
    async fn get_item_by_id(
        &self,
        ctx: &Context<'_>,
        store_id: ID,
        product_id: ID,
    ) -> Result<Option<Item>> {
        get_item_by_id(ctx, &store_id, &product_id)
            .await
            .map_err(|error| error.extend())
    }
}

async fn get_all_items(
    ctx: &Context<'_>,
    store_id: &ID,
    search: Option<String>,
) -> Result<Vec<Item>, ApiError> {
    authenticate(ctx).await?;

    let store = require_id("storeId", Some(store_id), MISSING_STORE_ID)?;

    Ok(app(ctx)?
        .items
        .list_items(store, search.filter(|search| !search.is_empty()))
        .await
        .map_err(into_api_error)?
        .into_iter()
        .map(Item::from)
        .collect())
}

async fn get_item_by_id(
    ctx: &Context<'_>,
    store_id: &ID,
    product_id: &ID,
) -> Result<Option<Item>, ApiError> {
    authenticate(ctx).await?;

    require(
        [id_text(Some(store_id)), id_text(Some(product_id))],
        MISSING_STORE_AND_PRODUCT_ID,
    )?;

    let store = parse_id("storeId", store_id)?;
    let item = parse_id("productId", product_id)?;

    Ok(app(ctx)?
        .items
        .get_item(store, item)
        .await
        .map_err(into_api_error)?
        .map(Item::from))
}
