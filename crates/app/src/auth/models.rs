//! Auth data models.

use crate::ids::TypedId;

/// Marker for caller identities. Users live with the identity provider, not in this database.
#[derive(Debug)]
pub struct User;

/// Authenticated caller id.
pub type UserId = TypedId<User>;
