//! GraphQL schema and HTTP endpoint.

use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use salvo::{prelude::*, writing::Text};
use tally_app::context::AppContext;
use tracing::debug;

use crate::{
    auth::request_gate,
    extensions::*,
    items::{ItemsMutation, ItemsQuery},
    stores::{StoresMutation, StoresQuery},
};

mod context;
mod errors;

pub(crate) use context::{app, authenticate};
pub(crate) use errors::ApiError;

/// Path the GraphQL endpoint is mounted on.
pub(crate) const GRAPHQL_PATH: &str = "graphql";

#[derive(Debug, Default, MergedObject)]
pub(crate) struct QueryRoot(StoresQuery, ItemsQuery);

#[derive(Debug, Default, MergedObject)]
pub(crate) struct MutationRoot(StoresMutation, ItemsMutation);

pub(crate) type TallySchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the executable schema over the shared services.
pub(crate) fn build_schema(app: AppContext) -> TallySchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(app)
    .finish()
}

/// Execute a GraphQL operation on behalf of the request's bearer.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<async_graphql::Response>, StatusError> {
    let state = depot.state_or_500()?;
    let gate = request_gate(req, &state.app.auth);

    let request = req
        .parse_json::<async_graphql::Request>()
        .await
        .map_err(|error| StatusError::bad_request().brief(error.to_string()))?;

    debug!(operation = ?request.operation_name, "executing graphql operation");

    Ok(Json(state.schema.execute(request.data(gate)).await))
}

/// Interactive GraphiQL explorer.
#[handler]
pub(crate) async fn graphiql(res: &mut Response) {
    res.render(Text::Html(
        GraphiQLSource::build()
            .endpoint(&format!("/{GRAPHQL_PATH}"))
            .finish(),
    ));
}
