//! Credential primitives for Rolodex.
//!
//! This crate provides:
//! - Argon2id password hashing and verification
//! - JWT session token generation and validation

mod error;
mod jwt;
mod password;

pub use error::*;
pub use jwt::*;
pub use password::*;

/// Default JWT expiration time in hours.
pub const DEFAULT_JWT_EXPIRATION_HOURS: u64 = 24;

/// Default JWT issuer.
pub const DEFAULT_JWT_ISSUER: &str = "rolodex";
