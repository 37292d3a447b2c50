//! REST protocol definitions for Rolodex server/client communication.
//!
//! This crate defines the JSON request and response bodies exchanged over
//! the HTTP API, plus the error envelope every failure is reported in.

mod error;
mod requests;
mod responses;
mod types;

pub use error::*;
pub use requests::*;
pub use responses::*;
pub use types::*;
