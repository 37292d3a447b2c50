//! Domain services.

pub mod credentials;
