//! HTTP client for the contact manager API.

use api_protocol::{
    Contact, ContactResponse, CreateContactRequest, DeleteContactResponse, ErrorEnvelope,
    ListContactsResponse, RegisterRequest, RegisterResponse, SigninRequest, SigninResponse,
    UpdateContactRequest, User,
};
use thiserror::Error;
use tracing::debug;

/// Client for the contact manager server.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Server URL
    base_url: String,
    /// HTTP client
    http_client: reqwest::Client,
    /// Bearer token for protected routes
    token: Option<String>,
}

impl ApiClient {
    /// Create a new client pointed at the given server.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http_client: reqwest::Client::new(),
            token: None,
        }
    }

    /// Attach a bearer token; subsequent requests to protected routes carry
    /// it in the Authorization header.
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Drop the bearer token.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self
            .http_client
            .request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn send<T: serde::de::DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = builder
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Error responses carry a JSON envelope; fall back to the bare
            // status when the body is not one.
            let envelope: Option<ErrorEnvelope> = response.json().await.ok();
            let (code, message) = match envelope {
                Some(envelope) => (envelope.error.code, envelope.error.message),
                None => (
                    api_protocol::error_codes::INTERNAL_ERROR.to_string(),
                    format!("Server returned status {status}"),
                ),
            };
            return Err(ClientError::Api {
                status: status.as_u16(),
                code,
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Deserialization(e.to_string()))
    }

    /// Register a new account.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, ClientError> {
        let request = RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        };

        debug!(email = %email, "Registering account");

        let response: RegisterResponse = self
            .send(self.request(reqwest::Method::POST, "/auth/register").json(&request))
            .await?;
        Ok(response.user)
    }

    /// Sign in and store the returned token on the client.
    pub async fn signin(&mut self, email: &str, password: &str) -> Result<User, ClientError> {
        let request = SigninRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        debug!(email = %email, "Signing in");

        let response: SigninResponse = self
            .send(self.request(reqwest::Method::POST, "/auth/signin").json(&request))
            .await?;
        self.token = Some(response.token);
        Ok(response.user)
    }

    /// Fetch all contacts owned by the logged-in user, newest first.
    pub async fn list_contacts(&self) -> Result<Vec<Contact>, ClientError> {
        let response: ListContactsResponse = self
            .send(self.request(reqwest::Method::GET, "/contacts"))
            .await?;
        Ok(response.contacts)
    }

    /// Create a contact.
    pub async fn create_contact(
        &self,
        request: &CreateContactRequest,
    ) -> Result<Contact, ClientError> {
        let response: ContactResponse = self
            .send(self.request(reqwest::Method::POST, "/contacts").json(request))
            .await?;
        Ok(response.contact)
    }

    /// Update a contact; only the fields set in the request change.
    pub async fn update_contact(
        &self,
        id: &str,
        request: &UpdateContactRequest,
    ) -> Result<Contact, ClientError> {
        let response: ContactResponse = self
            .send(
                self.request(reqwest::Method::PUT, &format!("/contacts/{id}"))
                    .json(request),
            )
            .await?;
        Ok(response.contact)
    }

    /// Delete a contact.
    pub async fn delete_contact(&self, id: &str) -> Result<(), ClientError> {
        let _: DeleteContactResponse = self
            .send(self.request(reqwest::Method::DELETE, &format!("/contacts/{id}")))
            .await?;
        Ok(())
    }

    /// Check server health.
    pub async fn health_check(&self) -> Result<(), ClientError> {
        let response = self
            .http_client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(ClientError::Api {
                status: response.status().as_u16(),
                code: api_protocol::error_codes::INTERNAL_ERROR.to_string(),
                message: format!("Health check failed with status {}", response.status()),
            })
        }
    }
}

/// Client errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error {status} ({code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_trims_trailing_slash() {
        let client = ApiClient::new("http://localhost:8080/");
        assert_eq!(client.base_url, "http://localhost:8080");
        assert!(client.token.is_none());
    }

    #[test]
    fn test_token_lifecycle() {
        let mut client = ApiClient::new("http://localhost:8080");
        client.set_token("abc".to_string());
        assert_eq!(client.token.as_deref(), Some("abc"));
        client.clear_token();
        assert!(client.token.is_none());
    }
}
