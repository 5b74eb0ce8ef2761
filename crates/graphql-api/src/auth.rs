//! Bearer token extraction.

use std::sync::Arc;

use salvo::{http::header::AUTHORIZATION, prelude::*};
use tally_app::auth::{AuthGate, AuthService};

/// Build the per-request auth capability from the `Authorization` header.
///
/// A missing or malformed header yields a gate without a token; the request is only
/// rejected once a resolver asks who the caller is.
pub(crate) fn request_gate(req: &Request, auth: &Arc<dyn AuthService>) -> AuthGate {
    AuthGate::new(
        extract_bearer_token(req).map(str::to_owned),
        Arc::clone(auth),
    )
}

fn extract_bearer_token(req: &Request) -> Option<&str> {
    let value = req.headers().get(AUTHORIZATION)?.to_str().ok()?;
    let mut parts = value.splitn(2, ' ');

    let scheme = parts.next()?;
    let token = parts.next()?.trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return None;
    }

    Some(token)
}
