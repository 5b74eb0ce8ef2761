//! Per-request authentication capability.

use std::{
    fmt::{Debug, Formatter, Result as FmtResult},
    sync::Arc,
};

use crate::auth::{AuthService, AuthServiceError, UserId};

/// Identity check handed to every request.
///
/// Holds whatever bearer token the request carried; nothing is verified until
/// [`AuthGate::authenticate`] is called.
#[derive(Clone)]
pub struct AuthGate {
    token: Option<String>,
    auth: Arc<dyn AuthService>,
}

impl AuthGate {
    #[must_use]
    pub fn new(token: Option<String>, auth: Arc<dyn AuthService>) -> Self {
        Self { token, auth }
    }

    /// Returns the caller's id.
    ///
    /// # Errors
    ///
    /// Fails when the request carried no token or the token does not verify.
    pub async fn authenticate(&self) -> Result<UserId, AuthServiceError> {
        let token = self
            .token
            .as_deref()
            .ok_or(AuthServiceError::MissingToken)?;

        self.auth.authenticate_bearer(token).await
    }
}

impl Debug for AuthGate {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("AuthGate")
            .field("has_token", &self.token.is_some())
            .finish_non_exhaustive()
    }
}
