//! API gateway

mod client;
mod errors;

pub use client::*;
pub use errors::*;
