//! Common types & constants shared between the operations scripts and the
//! integration tests

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod constants;
pub mod types;
