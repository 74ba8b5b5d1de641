//! Authentication

mod authenticator;
mod errors;
mod models;
mod service;

pub use authenticator::Authenticator;
pub use errors::*;
pub use models::*;
pub use service::*;
