//! Client library for the contact manager API.
//!
//! [`ApiClient`] speaks to the server, [`ContactsState`] holds the local
//! contact list together with its filtered view, and [`AuthSession`] tracks
//! the logged-in user.

pub mod api_client;
pub mod contacts;
pub mod session;

pub use api_client::{ApiClient, ClientError};
pub use contacts::{filter_contacts, ContactsState};
pub use session::AuthSession;
