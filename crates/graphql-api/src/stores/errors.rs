//! Store Errors

use tracing::error;

use tally_app::domain::stores::StoresServiceError;

use crate::graphql::ApiError;

pub(crate) fn into_api_error(error: StoresServiceError) -> ApiError {
    match error {
        StoresServiceError::NotFound => ApiError::NotFound("Store not found".to_string()),
        StoresServiceError::Storage(source) => {
            error!("store storage failure: {source}");

            ApiError::Internal
        }
    }
}
