//! Stores service errors.

use mongodb::error::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoresServiceError {
    #[error("store not found")]
    NotFound,

    #[error("storage error")]
    Storage(#[source] Error),
}

impl From<Error> for StoresServiceError {
    fn from(error: Error) -> Self {
        Self::Storage(error)
    }
}
