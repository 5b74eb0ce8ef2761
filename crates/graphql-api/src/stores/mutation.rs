//! Store mutations.

use async_graphql::{Context, ErrorExtensions, ID, Object, Result};
use tracing::{error, info};

use tally_app::{
    auth::UserId,
    cache::store_list_key,
    context::AppContext,
    domain::stores::{
        StoresServiceError,
        data::{NewStore, StoreUpdate},
    },
};

use crate::{
    graphql::{ApiError, app, authenticate},
    stores::{Message, Store, errors::into_api_error},
    validation::{MISSING_REQUIRED_FIELDS, MISSING_STORE_ID, require, require_id},
};

#[derive(Debug, Default)]
pub(crate) struct StoresMutation;

/// Editable store fields as supplied by the client.
#[derive(Debug, Default)]
struct StoreFields {
    name: Option<String>,
    description: Option<String>,
    phone_number: Option<String>,
    address: Option<String>,
    since: Option<String>,
}

impl StoreFields {
    /// Every field present, or the missing-fields error.
    fn into_present(self) -> Result<NewStore, ApiError> {
        require(
            [
                self.name.as_deref(),
                self.description.as_deref(),
                self.phone_number.as_deref(),
                self.address.as_deref(),
                self.since.as_deref(),
            ],
            MISSING_REQUIRED_FIELDS,
        )?;

        Ok(NewStore {
            name: self.name.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            phone_number: self.phone_number.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            since: self.since.unwrap_or_default(),
        })
    }
}

#[Object]
impl StoresMutation {
    /// Create a store owned by the caller.
    async fn create_store(
        &self,
        ctx: &Context<'_>,
        name: Option<String>,
        description: Option<String>,
        phone_number: Option<String>,
        address: Option<String>,
        since: Option<String>,
    ) -> Result<Store> {
        let fields = StoreFields {
            name,
            description,
            phone_number,
            address,
            since,
        };

        create_store(ctx, fields).await.map_err(|error| error.extend())
    }

    /// Replace the fields of a store owned by the caller. `null` when there is no such store.
    #[expect(
        clippy::too_many_arguments,
        reason = "each argument is a field of the GraphQL mutation"
    )]
    async fn update_store(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "_id")] id: Option<ID>,
        name: Option<String>,
        description: Option<String>,
        phone_number: Option<String>,
        address: Option<String>,
        since: Option<String>,
    ) -> Result<Option<Store>> {
        let fields = StoreFields {
            name,
            description,
            phone_number,
            address,
            since,
        };

        update_store(ctx, id, fields).await.map_err(|error| error.extend())
    }

    /// Delete a store owned by the caller. Its items are left in place.
    async fn delete_store(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "_id")] id: Option<ID>,
    ) -> Result<Message> {
        delete_store(ctx, id).await.map_err(|error| error.extend())
    }
}

async fn create_store(ctx: &Context<'_>, fields: StoreFields) -> Result<Store, ApiError> {
    let owner = authenticate(ctx).await?;
    let store = fields.into_present()?;
    let app = app(ctx)?;

    let created = app
        .stores
        .create_store(owner, store)
        .await
        .map_err(into_api_error)?;

    info!(store = %created.id, %owner, "store created");

    invalidate_store_list(app, owner).await;

    Ok(created.into())
}

async fn update_store(
    ctx: &Context<'_>,
    id: Option<ID>,
    fields: StoreFields,
) -> Result<Option<Store>, ApiError> {
    let owner = authenticate(ctx).await?;
    let store = require_id("_id", id.as_ref(), MISSING_STORE_ID)?;
    let NewStore {
        name,
        description,
        phone_number,
        address,
        since,
    } = fields.into_present()?;
    let app = app(ctx)?;

    let updated = app
        .stores
        .update_store(
            owner,
            store,
            StoreUpdate {
                name,
                description,
                phone_number,
                address,
                since,
            },
        )
        .await
        .map_err(into_api_error)?;

    if updated.is_some() {
        invalidate_store_list(app, owner).await;
    }

    Ok(updated.map(Store::from))
}

async fn delete_store(ctx: &Context<'_>, id: Option<ID>) -> Result<Message, ApiError> {
    let owner = authenticate(ctx).await?;
    let store = require_id("_id", id.as_ref(), MISSING_STORE_ID)?;

    let app = app(ctx)?;

    match app.stores.delete_store(owner, store).await {
        Ok(()) => {
            info!(%store, %owner, "store deleted");

            invalidate_store_list(app, owner).await;

            Ok(Message {
                message: format!("Store with id {store} has successfully deleted"),
            })
        }
        Err(StoresServiceError::NotFound) => {
            Err(ApiError::NotFound(format!("Store with id {store} not found")))
        }
        Err(error) => Err(into_api_error(error)),
    }
}

/// Drops the caller's cached store list after a write when the list is served from the cache.
///
/// The write has already been committed, so a failure here is logged rather than reported.
async fn invalidate_store_list(app: &AppContext, owner: UserId) {
    if !app.cache_policy.read_through {
        return;
    }

    if let Err(source) = app.cache.delete(&store_list_key(owner)).await {
        error!(%owner, "failed to invalidate cached store list: {source}");
    }
}
