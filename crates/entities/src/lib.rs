//! Core entity definitions for Rolodex.
//!
//! This crate defines the data types shared across the Rolodex application:
//! users and the contact records they own.

mod contact;
mod user;

pub use contact::*;
pub use user::*;
