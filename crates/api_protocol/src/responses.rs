//! Response body types.

use serde::{Deserialize, Serialize};

use crate::types::{Contact, User};

/// Response for `POST /auth/register` (201).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: User,
}

/// Response for `POST /auth/signin` (200).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigninResponse {
    pub message: String,
    pub user: User,
    pub token: String,
}

/// Response for `GET /contacts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListContactsResponse {
    pub contacts: Vec<Contact>,
}

/// Response for `POST /contacts` and `PUT /contacts/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
    pub contact: Contact,
}

/// Response for `DELETE /contacts/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteContactResponse {
    pub message: String,
}
