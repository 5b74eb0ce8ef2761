//! State

use std::sync::Arc;

use tally_app::context::AppContext;

use crate::graphql::{TallySchema, build_schema};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) app: AppContext,
    pub(crate) schema: TallySchema,
}

impl State {
    #[must_use]
    pub(crate) fn new(app: AppContext) -> Self {
        Self {
            schema: build_schema(app.clone()),
            app,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app))
    }
}
