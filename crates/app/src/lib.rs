//! Till client services: session handling, the API gateway and the order,
//! catalog, customer and report workflows built on top of it.

pub mod auth;
pub mod config;
pub mod context;
pub mod domain;
pub mod gateway;
pub mod navigator;
pub mod observability;
pub mod session;

#[cfg(test)]
mod test;
