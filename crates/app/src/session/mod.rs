//! Session store and token persistence.

mod errors;
mod storage;
mod store;

pub use errors::*;
pub use storage::*;
pub use store::*;
