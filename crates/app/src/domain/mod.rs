//! Tally Domain Concerns

pub mod items;
pub mod stores;
