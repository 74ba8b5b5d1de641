//! Client-side domain concerns

pub mod catalog;
pub mod customers;
pub mod orders;
pub mod reports;
pub mod till;
