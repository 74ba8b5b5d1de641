//! Brewpos
//!
//! Domain core of the brewpos point-of-sale client: catalog entries, the cart,
//! orders, customers, sales reports, sessions and view gating. Everything here is
//! synchronous and free of I/O; the `brewpos-app` crate drives it against the backend.

pub mod cart;
pub mod customers;
pub mod ids;
pub mod navigation;
pub mod orders;
pub mod payments;
pub mod prelude;
pub mod prices;
pub mod products;
pub mod reports;
pub mod session;
