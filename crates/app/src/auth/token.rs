//! Bearer token claims, signing and verification.

use jiff::{SignedDuration, Timestamp};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::auth::{AuthServiceError, UserId};

/// Signing algorithm for every token this service accepts.
pub const TOKEN_ALGORITHM: Algorithm = Algorithm::HS256;

/// Claims carried by a caller's bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Caller id as 24 character hex.
    pub sub: String,

    /// Issued at (Unix seconds).
    pub iat: i64,

    /// Expiry (Unix seconds).
    pub exp: i64,
}

impl Claims {
    #[must_use]
    pub fn new(user: UserId, issued_at: Timestamp, ttl: SignedDuration) -> Self {
        Self {
            sub: user.to_hex(),
            iat: issued_at.as_second(),
            exp: issued_at.as_second().saturating_add(ttl.as_secs()),
        }
    }

    /// The caller id named by `sub`.
    ///
    /// # Errors
    ///
    /// Returns an error if `sub` is not an `ObjectId`.
    pub fn user_id(&self) -> Result<UserId, AuthServiceError> {
        UserId::parse_str(&self.sub).map_err(AuthServiceError::InvalidSubject)
    }
}

/// Signs `claims` with the shared secret.
///
/// # Errors
///
/// Returns an error if the token cannot be encoded.
pub fn sign_token(claims: &Claims, key: &EncodingKey) -> Result<String, AuthServiceError> {
    encode(&Header::new(TOKEN_ALGORITHM), claims, key).map_err(AuthServiceError::Signing)
}

/// Verifies signature and expiry of a bearer token.
///
/// # Errors
///
/// Returns an error for malformed, expired or foreign-signed tokens.
pub fn verify_token(token: &str, key: &DecodingKey) -> Result<Claims, AuthServiceError> {
    let mut validation = Validation::new(TOKEN_ALGORITHM);
    validation.set_required_spec_claims(&["exp", "sub"]);

    decode::<Claims>(token, key, &validation)
        .map(|data| data.claims)
        .map_err(AuthServiceError::InvalidToken)
}
