//! Item resolvers

mod errors;
mod mutation;
mod query;
mod types;

pub(crate) use mutation::ItemsMutation;
pub(crate) use query::ItemsQuery;
pub(crate) use types::Item;
