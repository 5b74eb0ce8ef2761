//! Auth service errors.

use jsonwebtoken::errors::Error as JwtError;
use thiserror::Error;

use crate::ids::ObjectIdError;

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("missing bearer token")]
    MissingToken,

    #[error("invalid token")]
    InvalidToken(#[source] JwtError),

    #[error("token subject is not a user id")]
    InvalidSubject(#[source] ObjectIdError),

    #[error("failed to sign token")]
    Signing(#[source] JwtError),
}
