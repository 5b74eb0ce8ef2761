//! Container-backed test infrastructure.

mod cache;
mod db;
pub(crate) mod helpers;

pub(crate) use cache::TestCache;
pub(crate) use context::TestContext;
