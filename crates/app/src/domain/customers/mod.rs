//! Customers

mod manager;
mod service;

pub use manager::*;
pub use service::*;
