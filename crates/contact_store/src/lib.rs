//! User and contact storage for Rolodex.
//!
//! This crate provides the storage abstraction behind the HTTP API. Every
//! contact operation is scoped by the owning user: lookups always filter by
//! `(contact id, owner id)` in a single predicate, so a wrong owner is
//! indistinguishable from a missing record.

mod error;
mod memory;
mod traits;

pub use error::*;
pub use memory::*;
pub use traits::*;
