//! Shared application domain, persistence and cache modules.

pub mod auth;
pub mod cache;
pub mod context;
pub mod database;
pub mod domain;
pub mod health;
pub mod ids;

#[cfg(all(test, feature = "db-tests"))]
mod test;
