//! Test support shared by service and gateway tests.

mod helpers;

pub(crate) use helpers::*;
pub(crate) use server::*;
