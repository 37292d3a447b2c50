//! In-memory store implementation.

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use entities::{Contact, ContactPatch, User};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{ContactStore, StoreError, StoreResult};

/// In-memory store backed by per-collection locks.
///
/// Each operation takes one lock for its whole duration, which gives the
/// per-document atomicity the API layer relies on. No cross-collection
/// transactions.
#[derive(Debug, Default)]
pub struct MemoryContactStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    contacts: Arc<RwLock<HashMap<Uuid, Contact>>>,
}

impl MemoryContactStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactStore for MemoryContactStore {
    // =========================================================================
    // User operations
    // =========================================================================

    async fn create_user(&self, user: User) -> StoreResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(StoreError::already_exists("User", user.id.to_string()));
        }
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::already_exists("User", user.email.clone()));
        }
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, id: Uuid) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> StoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    // =========================================================================
    // Contact operations
    // =========================================================================

    async fn list_contacts(&self, owner: Uuid) -> StoreResult<Vec<Contact>> {
        let contacts = self.contacts.read().await;
        let mut result: Vec<Contact> = contacts
            .values()
            .filter(|c| c.owner_id == owner)
            .cloned()
            .collect();
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(result)
    }

    async fn get_contact(&self, owner: Uuid, id: Uuid) -> StoreResult<Option<Contact>> {
        let contacts = self.contacts.read().await;
        Ok(contacts.get(&id).filter(|c| c.owner_id == owner).cloned())
    }

    async fn create_contact(&self, contact: Contact) -> StoreResult<Contact> {
        let mut contacts = self.contacts.write().await;
        if contacts.contains_key(&contact.id) {
            return Err(StoreError::already_exists("Contact", contact.id.to_string()));
        }
        contacts.insert(contact.id, contact.clone());
        Ok(contact)
    }

    async fn update_contact(
        &self,
        owner: Uuid,
        id: Uuid,
        patch: ContactPatch,
    ) -> StoreResult<Contact> {
        let mut contacts = self.contacts.write().await;
        // Single (id, owner) predicate: wrong owner looks like a miss.
        match contacts.get_mut(&id).filter(|c| c.owner_id == owner) {
            Some(contact) => {
                contact.apply(patch);
                Ok(contact.clone())
            }
            None => Err(StoreError::not_found("Contact", id.to_string())),
        }
    }

    async fn delete_contact(&self, owner: Uuid, id: Uuid) -> StoreResult<()> {
        let mut contacts = self.contacts.write().await;
        match contacts.get(&id).filter(|c| c.owner_id == owner) {
            Some(_) => {
                contacts.remove(&id);
                Ok(())
            }
            None => Err(StoreError::not_found("Contact", id.to_string())),
        }
    }
}
