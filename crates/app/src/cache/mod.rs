//! Store-list cache

mod errors;
mod keys;
mod service;

pub use errors::CacheError;
pub use keys::store_list_key;
pub use service::*;
