//! Items service errors.

use mongodb::error::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ItemsServiceError {
    /// The freshly inserted item could not be read back.
    #[error("item not found after insert")]
    NotFound,

    #[error("storage error")]
    Storage(#[source] Error),
}

impl From<Error> for ItemsServiceError {
    fn from(error: Error) -> Self {
        Self::Storage(error)
    }
}
