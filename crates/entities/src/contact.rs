//! Contact entity definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A contact record owned by exactly one user.
///
/// The owner reference is set server-side at creation and is immutable.
/// `email` and `phone` are stored as plain strings; at least one of them is
/// non-empty (enforced by validation, not by the type). Tags keep their
/// insertion order for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    /// Unique identifier.
    pub id: Uuid,
    /// Owning user; every lookup is scoped by this.
    pub owner_id: Uuid,
    /// Contact name.
    pub name: String,
    /// Email address (may be empty when only a phone is known).
    pub email: String,
    /// Phone number, stored as typed.
    pub phone: String,
    /// Company or organization.
    pub company: Option<String>,
    /// Free-text notes.
    pub notes: Option<String>,
    /// Free-text tags, insertion order preserved.
    pub tags: Vec<String>,
    /// When this record was created (server-assigned, set once).
    pub created_at: DateTime<Utc>,
}

/// Client-supplied fields for creating a contact.
///
/// Deliberately has no owner or id field: both are assigned server-side from
/// the authenticated context, so a client can never attach a contact to
/// another user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactDraft {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub company: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial update for a contact; only present fields are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl ContactPatch {
    /// Returns true if the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.company.is_none()
            && self.notes.is_none()
            && self.tags.is_none()
    }
}

impl Contact {
    /// Creates a new contact for `owner_id` from client-supplied fields.
    pub fn new(owner_id: Uuid, draft: ContactDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            company: draft.company,
            notes: draft.notes,
            tags: draft.tags,
            created_at: Utc::now(),
        }
    }

    /// Applies a partial update. Identity fields (id, owner, created_at)
    /// cannot be patched.
    pub fn apply(&mut self, patch: ContactPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(company) = patch.company {
            self.company = Some(company);
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ContactDraft {
        ContactDraft {
            name: "Bob".to_string(),
            email: "bob@example.com".to_string(),
            phone: "555-123-4567".to_string(),
            company: Some("Acme".to_string()),
            notes: None,
            tags: vec!["work".to_string(), "vip".to_string()],
        }
    }

    #[test]
    fn test_contact_creation_assigns_owner() {
        let owner = Uuid::new_v4();
        let contact = Contact::new(owner, draft());

        assert_eq!(contact.owner_id, owner);
        assert_eq!(contact.name, "Bob");
        assert_eq!(contact.tags, vec!["work", "vip"]);
    }

    #[test]
    fn test_patch_applies_only_present_fields() {
        let mut contact = Contact::new(Uuid::new_v4(), draft());
        let created_at = contact.created_at;

        contact.apply(ContactPatch {
            name: Some("Robert".to_string()),
            notes: Some("met at conference".to_string()),
            ..Default::default()
        });

        assert_eq!(contact.name, "Robert");
        assert_eq!(contact.notes.as_deref(), Some("met at conference"));
        // untouched fields survive
        assert_eq!(contact.email, "bob@example.com");
        assert_eq!(contact.phone, "555-123-4567");
        assert_eq!(contact.company.as_deref(), Some("Acme"));
        assert_eq!(contact.created_at, created_at);
    }

    #[test]
    fn test_empty_patch_is_detected() {
        assert!(ContactPatch::default().is_empty());
        assert!(
            !ContactPatch {
                phone: Some("5551234567".to_string()),
                ..Default::default()
            }
            .is_empty()
        );
    }

    #[test]
    fn test_draft_defaults_for_missing_wire_fields() {
        let draft: ContactDraft = serde_json::from_str(r#"{"name":"Bob"}"#).unwrap();
        assert_eq!(draft.email, "");
        assert_eq!(draft.phone, "");
        assert!(draft.tags.is_empty());
    }
}
