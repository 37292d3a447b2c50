//! Form-level validators.
//!
//! Each validator composes the field checks from [`crate::fields`] into a
//! map of field name to message. Absence of a key means the field passed.

use std::collections::BTreeMap;

use entities::ContactDraft;
use serde::Serialize;

use crate::{check_password, is_blank, is_valid_email, is_valid_name, is_valid_phone};

/// Maximum contact name length.
pub const MAX_NAME_LEN: usize = 100;
/// Maximum contact email length.
pub const MAX_EMAIL_LEN: usize = 100;
/// Maximum notes length.
pub const MAX_NOTES_LEN: usize = 500;
/// Maximum number of tags per contact.
pub const MAX_TAGS: usize = 10;
/// Maximum length of a single tag.
pub const MAX_TAG_LEN: usize = 30;

/// Field-level validation errors, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field`, keeping the first one reported.
    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    /// The form is valid iff no field has an error.
    pub fn is_valid(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the message for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    /// Consumes the map into owned field/message pairs.
    pub fn into_messages(self) -> BTreeMap<String, String> {
        self.0
            .into_iter()
            .map(|(field, message)| (field.to_string(), message))
            .collect()
    }
}

/// Validates the contact create/edit form.
///
/// Name is required; email and phone are each optional but at least one of
/// the two must be present; notes and tags are bounded.
pub fn validate_contact_form(draft: &ContactDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if is_blank(&draft.name) {
        errors.push("name", "Name is required");
    } else if !is_valid_name(&draft.name) {
        errors.push("name", "Please enter a valid name");
    } else if draft.name.chars().count() > MAX_NAME_LEN {
        errors.push("name", "Name must not exceed 100 characters");
    }

    if !is_blank(&draft.email) {
        if !is_valid_email(&draft.email) {
            errors.push("email", "Please enter a valid email address");
        } else if draft.email.chars().count() > MAX_EMAIL_LEN {
            errors.push("email", "Email must not exceed 100 characters");
        }
    }

    if !is_blank(&draft.phone) && !is_valid_phone(&draft.phone) {
        errors.push("phone", "Please enter a valid phone number");
    }

    if is_blank(&draft.email) && is_blank(&draft.phone) {
        errors.push("email", "Please provide at least email or phone");
        errors.push("phone", "Please provide at least email or phone");
    }

    if let Some(notes) = &draft.notes {
        if notes.chars().count() > MAX_NOTES_LEN {
            errors.push("notes", "Notes must not exceed 500 characters");
        }
    }

    if draft.tags.len() > MAX_TAGS {
        errors.push("tags", "Maximum 10 tags allowed");
    } else if draft.tags.iter().any(|t| t.chars().count() > MAX_TAG_LEN) {
        errors.push("tags", "Each tag must not exceed 30 characters");
    }

    errors
}

/// Validates the login form.
pub fn validate_login_form(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if is_blank(email) {
        errors.push("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.push("email", "Please enter a valid email address");
    }

    if password.is_empty() {
        errors.push("password", "Password is required");
    } else if password.chars().count() < 8 {
        errors.push("password", "Password must be at least 8 characters");
    }

    errors
}

/// Validates the registration form.
///
/// `confirm_password` is `Some` when the form carries a confirmation field
/// (the browser form does) and `None` when the caller only has the three
/// registration fields (the server re-check does).
pub fn validate_register_form(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: Option<&str>,
) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if is_blank(name) {
        errors.push("name", "Name is required");
    } else if !is_valid_name(name) {
        errors.push("name", "Please enter a valid name");
    }

    if is_blank(email) {
        errors.push("email", "Email is required");
    } else if !is_valid_email(email) {
        errors.push("email", "Please enter a valid email address");
    }

    let password_check = check_password(password);
    if !password_check.valid {
        errors.push("password", password_check.message);
    }

    if let Some(confirm) = confirm_password {
        if confirm.is_empty() {
            errors.push("confirm_password", "Please confirm your password");
        } else if confirm != password {
            errors.push("confirm_password", "Passwords do not match");
        }
    }

    errors
}
