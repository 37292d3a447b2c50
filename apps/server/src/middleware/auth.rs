//! Authentication middleware.

use std::sync::Arc;

use auth::{Claims, JwtManager};
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use contact_store::ContactStore;
use uuid::Uuid;

use crate::error::ServerError;
use crate::state::AppState;

/// Authenticated caller identity, resolved from the bearer token and
/// attached to the request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// User ID.
    pub id: Uuid,
    /// User email.
    pub email: String,
    /// User display name.
    pub name: String,
}

impl TryFrom<Claims> for AuthenticatedUser {
    type Error = auth::AuthError;

    fn try_from(claims: Claims) -> Result<Self, Self::Error> {
        Ok(Self {
            id: claims.user_id()?,
            email: claims.email,
            name: claims.name,
        })
    }
}

/// Extracts the bearer token from the Authorization header.
fn extract_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

fn validate_token(jwt_manager: &JwtManager, token: &str) -> Result<Claims, ServerError> {
    Ok(jwt_manager.validate_token(token)?)
}

/// Authentication middleware for protected routes.
///
/// Two outcomes: a valid token puts an [`AuthenticatedUser`] into the
/// request extensions and the pipeline continues; anything else ends the
/// request with a 401 envelope. There is no revocation check — a token is
/// honored until its expiry claim.
pub async fn auth_middleware<S: ContactStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = match extract_token(&request) {
        Some(token) => token,
        None => return ServerError::AuthenticationRequired.into_response(),
    };

    let claims = match validate_token(&state.jwt_manager, token) {
        Ok(claims) => claims,
        Err(err) => return err.into_response(),
    };

    match AuthenticatedUser::try_from(claims) {
        Ok(user) => {
            request.extensions_mut().insert(user);
        }
        Err(err) => return ServerError::Auth(err).into_response(),
    }

    next.run(request).await
}
