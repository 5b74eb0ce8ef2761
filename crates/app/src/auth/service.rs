//! Auth service.

use std::fmt::{Debug, Formatter, Result as FmtResult};

use async_trait::async_trait;
use jiff::{SignedDuration, Timestamp};
use jsonwebtoken::{DecodingKey, EncodingKey};
use mockall::automock;

use crate::auth::{AuthServiceError, Claims, UserId, sign_token, verify_token};

/// Verifies HS256 bearer tokens minted by the identity provider.
#[derive(Clone)]
pub struct JwtAuthService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtAuthService {
    #[must_use]
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issue a bearer token for `user`, valid for `ttl`.
    ///
    /// # Errors
    ///
    /// Returns an error if the token cannot be signed.
    pub fn issue_token(
        &self,
        user: UserId,
        ttl: SignedDuration,
    ) -> Result<String, AuthServiceError> {
        sign_token(&Claims::new(user, Timestamp::now(), ttl), &self.encoding_key)
    }
}

impl Debug for JwtAuthService {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("JwtAuthService").finish_non_exhaustive()
    }
}

#[async_trait]
impl AuthService for JwtAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserId, AuthServiceError> {
        verify_token(bearer_token, &self.decoding_key)?.user_id()
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolves a bearer token to the caller it was issued for.
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<UserId, AuthServiceError>;
}
