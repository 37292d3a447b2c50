//! Logged-in session state.

use api_protocol::User;

/// The client's view of the current session.
///
/// Holds the signed-in user and the bearer token returned by the server.
/// Both are present or both are absent.
#[derive(Debug, Clone, Default)]
pub struct AuthSession {
    user: Option<User>,
    token: Option<String>,
}

impl AuthSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the signed-in user and token.
    pub fn log_in(&mut self, user: User, token: String) {
        self.user = Some(user);
        self.token = Some(token);
    }

    /// Drops the user and token.
    pub fn log_out(&mut self) {
        self.user = None;
        self.token = None;
    }

    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The token to present on protected routes.
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn user() -> User {
        User {
            id: "u1".to_string(),
            name: "Alice".to_string(),
            email: "alice@x.com".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_login_then_logout() {
        let mut session = AuthSession::new();
        assert!(!session.is_logged_in());
        assert!(session.bearer_token().is_none());

        session.log_in(user(), "token-123".to_string());
        assert!(session.is_logged_in());
        assert_eq!(session.bearer_token(), Some("token-123"));
        assert_eq!(session.user().map(|u| u.email.as_str()), Some("alice@x.com"));

        session.log_out();
        assert!(!session.is_logged_in());
        assert!(session.user().is_none());
    }
}
