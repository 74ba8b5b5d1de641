//! Catalog

mod cache;
mod service;

pub use cache::*;
pub use service::*;
