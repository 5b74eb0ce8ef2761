//! Authentication

mod errors;
mod gate;
mod models;
mod service;
mod token;

pub use errors::*;
pub use gate::AuthGate;
pub use models::*;
pub use service::*;
pub use token::*;
