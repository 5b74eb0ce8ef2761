//! Store resolvers

mod errors;
mod mutation;
mod query;
mod types;

pub(crate) use mutation::StoresMutation;
pub(crate) use query::StoresQuery;
pub(crate) use types::{Message, Store};
