//! Resolver context access.

use async_graphql::Context;
use tally_app::{
    auth::{AuthGate, UserId},
    context::AppContext,
};
use tracing::error;

use crate::graphql::errors::ApiError;

/// Services shared by every request.
pub(crate) fn app<'a>(ctx: &Context<'a>) -> Result<&'a AppContext, ApiError> {
    ctx.data::<AppContext>().map_err(|source| {
        error!("application context missing from schema: {}", source.message);

        ApiError::Internal
    })
}

/// Resolve the caller. Must be the first thing every resolver does.
pub(crate) async fn authenticate(ctx: &Context<'_>) -> Result<UserId, ApiError> {
    let gate = ctx.data::<AuthGate>().map_err(|source| {
        error!("auth gate missing from request: {}", source.message);

        ApiError::Internal
    })?;

    Ok(gate.authenticate().await?)
}
