//! Orders

mod errors;
mod service;
mod submission;
mod views;

pub use errors::*;
pub use service::*;
pub use submission::*;
pub use views::*;
