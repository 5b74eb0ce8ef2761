//! GraphQL error mapping.

use async_graphql::{Error, ErrorExtensions};
use tally_app::auth::AuthServiceError;
use thiserror::Error;

use crate::validation::ValidationError;

/// Failures a resolver can report to the client.
///
/// Every variant is rendered with an `extensions.code` the client can branch on.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    #[error("Authentication required: {0}")]
    Unauthenticated(#[source] AuthServiceError),

    #[error("{0}")]
    BadUserInput(#[from] ValidationError),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    pub(crate) const fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated(_) => "UNAUTHENTICATED",
            Self::BadUserInput(_) => "BAD_USER_INPUT",
            Self::NotFound(_) => "NOT_FOUND",
            Self::Internal => "INTERNAL_SERVER_ERROR",
        }
    }
}

impl From<AuthServiceError> for ApiError {
    fn from(error: AuthServiceError) -> Self {
        Self::Unauthenticated(error)
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> Error {
        Error::new(self.to_string())
            .extend_with(|_, extensions| extensions.set("code", self.code()))
    }
}
