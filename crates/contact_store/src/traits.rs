//! Store trait definitions.

use async_trait::async_trait;
use entities::{Contact, ContactPatch, User};
use uuid::Uuid;

use crate::StoreResult;

/// Trait for user and contact storage operations.
///
/// Contact mutations take the caller's owner id alongside the contact id and
/// must treat a `(id, owner)` mismatch exactly like a missing record. There
/// is no unscoped contact lookup on purpose.
#[async_trait]
pub trait ContactStore: Send + Sync {
    // =========================================================================
    // User operations
    // =========================================================================

    /// Creates a new user. Fails if the id or email is already taken.
    async fn create_user(&self, user: User) -> StoreResult<User>;

    /// Gets a user by ID.
    async fn get_user(&self, id: Uuid) -> StoreResult<Option<User>>;

    /// Gets a user by email (exact, case-sensitive match).
    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>>;

    // =========================================================================
    // Contact operations (owner-scoped)
    // =========================================================================

    /// Lists all contacts owned by `owner`, newest-created-first.
    async fn list_contacts(&self, owner: Uuid) -> StoreResult<Vec<Contact>>;

    /// Gets the contact matching `(id, owner)`, or `None` when no such
    /// contact is visible to `owner`.
    async fn get_contact(&self, owner: Uuid, id: Uuid) -> StoreResult<Option<Contact>>;

    /// Persists a new contact. The owner is already set on the entity.
    async fn create_contact(&self, contact: Contact) -> StoreResult<Contact>;

    /// Applies a partial update to the contact matching `(id, owner)`.
    /// Fails with `NotFound` when no such contact is visible to `owner`.
    async fn update_contact(
        &self,
        owner: Uuid,
        id: Uuid,
        patch: ContactPatch,
    ) -> StoreResult<Contact>;

    /// Hard-deletes the contact matching `(id, owner)`.
    /// Fails with `NotFound` when no such contact is visible to `owner`.
    async fn delete_contact(&self, owner: Uuid, id: Uuid) -> StoreResult<()>;
}
