//! Item Errors

use tracing::error;

use tally_app::domain::items::ItemsServiceError;

use crate::graphql::ApiError;

pub(crate) fn into_api_error(error: ItemsServiceError) -> ApiError {
    match error {
        ItemsServiceError::NotFound => {
            error!("item missing after insert");

            ApiError::Internal
        }
        ItemsServiceError::Storage(source) => {
            error!("item storage failure: {source}");

            ApiError::Internal
        }
    }
}
