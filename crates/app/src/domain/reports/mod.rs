//! Reports

mod report;
mod service;

pub use report::*;
pub use service::*;
