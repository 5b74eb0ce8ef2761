//! Cache keys.

use sha2::{Digest, Sha256};

use crate::auth::UserId;

const STORE_LIST_QUERY: &str = "getAllStores";

/// Key for the cached store list of `owner`.
///
/// Keys are per caller: one caller's stores are never served to another.
#[must_use]
pub fn store_list_key(owner: UserId) -> String {
    let digest = Sha256::digest(format!("{STORE_LIST_QUERY}:{owner}").as_bytes());

    format!("stores:{digest:x}")
}
