//! Store queries.

use async_graphql::{Context, ErrorExtensions, ID, Object, Result};
use tracing::{debug, error, warn};

use tally_app::{auth::UserId, cache::store_list_key, context::AppContext};

use crate::{
    graphql::{ApiError, app, authenticate},
    stores::{Store, errors::into_api_error},
    validation::{MISSING_STORE_ID, require_id},
};

#[derive(Debug, Default)]
pub(crate) struct StoresQuery;

#[Object]
impl StoresQuery {
    /// Every store owned by the caller.
    async fn get_all_stores(&self, ctx: &Context<'_>) -> Result<Vec<Store>> {
        get_all_stores(ctx).await.map_err(|error| error.extend())
    }

    /// A store owned by the caller, or `null`.
    async fn get_store_by_id(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "_id")] id: Option<ID>,
    ) -> Result<Option<Store>> {
        get_store_by_id(ctx, id).await.map_err(|error| error.extend())
    }
}

async fn get_all_stores(ctx: &Context<'_>) -> Result<Vec<Store>, ApiError> {
    let owner = authenticate(ctx).await?;
    let app = app(ctx)?;
    let key = store_list_key(owner);

    if app.cache_policy.read_through
        && let Some(stores) = cached_stores(app, &key).await
    {
        debug!(%owner, "store list served from cache");

        return Ok(stores);
    }

    let stores = list_owned_stores(app, owner).await?;

    let payload = serde_json::to_string(&stores).map_err(|source| {
        error!("failed to serialize store list: {source}");

        ApiError::Internal
    })?;

    app.cache.set(&key, payload).await.map_err(|source| {
        error!("failed to cache store list: {source}");

        ApiError::Internal
    })?;

    debug!(%owner, count = stores.len(), "store list cached");

    Ok(stores)
}

async fn list_owned_stores(app: &AppContext, owner: UserId) -> Result<Vec<Store>, ApiError> {
    Ok(app
        .stores
        .list_stores(owner)
        .await
        .map_err(into_api_error)?
        .into_iter()
        .map(Store::from)
        .collect())
}

/// A cached list for `key`; unreadable or corrupt entries count as a miss.
async fn cached_stores(app: &AppContext, key: &str) -> Option<Vec<Store>> {
    let payload = match app.cache.get(key).await {
        Ok(payload) => payload?,
        Err(source) => {
            warn!("failed to read cached store list: {source}");

            return None;
        }
    };

    match serde_json::from_str(&payload) {
        Ok(stores) => Some(stores),
        Err(source) => {
            warn!("ignoring corrupt cached store list: {source}");

            None
        }
    }
}

async fn get_store_by_id(ctx: &Context<'_>, id: Option<ID>) -> Result<Option<Store>, ApiError> {
    let owner = authenticate(ctx).await?;

    let store = require_id("_id", id.as_ref(), MISSING_STORE_ID)?;

    Ok(app(ctx)?
        .stores
        .get_store(owner, store)
        .await
        .map_err(into_api_error)?
        .map(Store::from))
}
