//! Credential service: registration and login.

use auth::JwtManager;
use contact_store::{ContactStore, StoreError};
use entities::User;

use crate::error::{ServerError, ServerResult};

/// Registers a new user.
///
/// Fails with [`ServerError::DuplicateEmail`] when the email is already
/// taken. The password is hashed before it is ever handed to the store; the
/// returned entity still carries the hash, so callers must convert to the
/// public profile type before responding.
pub async fn register_user<S: ContactStore>(
    store: &S,
    name: &str,
    email: &str,
    password: &str,
) -> ServerResult<User> {
    if store.get_user_by_email(email).await?.is_some() {
        return Err(ServerError::DuplicateEmail);
    }

    let password_hash = auth::hash_password(password)?;
    // The email check and the insert are separate store calls, so a
    // concurrent registration can still collide on insert. That collision is
    // a duplicate email too, not an internal error.
    let user = store
        .create_user(User::new(name, email, password_hash))
        .await
        .map_err(|e| match e {
            StoreError::AlreadyExists { .. } => ServerError::DuplicateEmail,
            other => ServerError::Store(other),
        })?;

    tracing::info!(user_id = %user.id, "User registered");

    Ok(user)
}

/// Verifies credentials and issues a session token.
///
/// Unknown email and wrong password are logged separately but surface as the
/// same [`ServerError::InvalidCredentials`], so responses cannot be used to
/// enumerate registered emails.
pub async fn authenticate<S: ContactStore>(
    store: &S,
    jwt_manager: &JwtManager,
    email: &str,
    password: &str,
) -> ServerResult<(User, String)> {
    let user = match store.get_user_by_email(email).await? {
        Some(user) => user,
        None => {
            tracing::debug!("Login failed: unknown email");
            return Err(ServerError::InvalidCredentials);
        }
    };

    if !auth::verify_password(password, &user.password_hash)? {
        tracing::debug!(user_id = %user.id, "Login failed: wrong password");
        return Err(ServerError::InvalidCredentials);
    }

    let token =
        jwt_manager.generate_token(user.id, user.email.clone(), user.name.clone())?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok((user, token))
}

#[cfg(test)]
mod tests {
    use auth::JwtConfig;
    use contact_store::MemoryContactStore;

    use super::*;

    fn jwt_manager() -> JwtManager {
        JwtManager::new(JwtConfig::new("test-secret-key-must-be-long-enough"))
    }

    #[tokio::test]
    async fn test_register_and_login() {
        let store = MemoryContactStore::new();
        let jwt = jwt_manager();

        let user = register_user(&store, "Alice", "alice@x.com", "Abcd123!")
            .await
            .unwrap();
        assert_ne!(user.password_hash, "Abcd123!");

        let (logged_in, token) = authenticate(&store, &jwt, "alice@x.com", "Abcd123!")
            .await
            .unwrap();
        assert_eq!(logged_in.id, user.id);

        let claims = jwt.validate_token(&token).unwrap();
        assert_eq!(claims.user_id().unwrap(), user.id);
    }

    #[tokio::test]
    async fn test_duplicate_email() {
        let store = MemoryContactStore::new();

        register_user(&store, "Alice", "alice@x.com", "Abcd123!").await.unwrap();
        let result = register_user(&store, "Other", "alice@x.com", "Efgh456!").await;

        assert!(matches!(result, Err(ServerError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_concurrent_registration_collision_is_a_duplicate_email() {
        use async_trait::async_trait;
        use contact_store::StoreResult;
        use entities::{Contact, ContactPatch};
        use uuid::Uuid;

        // Store where the email lookup never sees the row the insert will
        // collide with, like a second registration landing between the two
        // calls.
        struct StaleLookupStore {
            inner: MemoryContactStore,
        }

        #[async_trait]
        impl ContactStore for StaleLookupStore {
            async fn create_user(&self, user: User) -> StoreResult<User> {
                self.inner.create_user(user).await
            }

            async fn get_user(&self, id: Uuid) -> StoreResult<Option<User>> {
                self.inner.get_user(id).await
            }

            async fn get_user_by_email(&self, _email: &str) -> StoreResult<Option<User>> {
                Ok(None)
            }

            async fn list_contacts(&self, owner: Uuid) -> StoreResult<Vec<Contact>> {
                self.inner.list_contacts(owner).await
            }

            async fn get_contact(&self, owner: Uuid, id: Uuid) -> StoreResult<Option<Contact>> {
                self.inner.get_contact(owner, id).await
            }

            async fn create_contact(&self, contact: Contact) -> StoreResult<Contact> {
                self.inner.create_contact(contact).await
            }

            async fn update_contact(
                &self,
                owner: Uuid,
                id: Uuid,
                patch: ContactPatch,
            ) -> StoreResult<Contact> {
                self.inner.update_contact(owner, id, patch).await
            }

            async fn delete_contact(&self, owner: Uuid, id: Uuid) -> StoreResult<()> {
                self.inner.delete_contact(owner, id).await
            }
        }

        let store = StaleLookupStore {
            inner: MemoryContactStore::new(),
        };

        register_user(&store, "Alice", "alice@x.com", "Abcd123!").await.unwrap();
        let result = register_user(&store, "Other", "alice@x.com", "Efgh456!").await;

        assert!(matches!(result, Err(ServerError::DuplicateEmail)));
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_look_the_same() {
        let store = MemoryContactStore::new();
        let jwt = jwt_manager();

        register_user(&store, "Alice", "alice@x.com", "Abcd123!").await.unwrap();

        let wrong_password = authenticate(&store, &jwt, "alice@x.com", "Wrong123!").await;
        let unknown_email = authenticate(&store, &jwt, "nobody@x.com", "Abcd123!").await;

        assert!(matches!(wrong_password, Err(ServerError::InvalidCredentials)));
        assert!(matches!(unknown_email, Err(ServerError::InvalidCredentials)));
    }
}
