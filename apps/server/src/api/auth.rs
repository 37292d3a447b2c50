//! Authentication API endpoints.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use api_protocol::{RegisterRequest, RegisterResponse, SigninRequest, SigninResponse};
use contact_store::ContactStore;
use validation::validate_register_form;

use crate::error::{ServerError, ServerResult};
use crate::services::credentials;
use crate::state::AppState;

/// Converts a user entity to its public wire form (no password hash).
pub(crate) fn entity_to_api_user(user: &entities::User) -> api_protocol::User {
    api_protocol::User {
        id: user.id.to_string(),
        name: user.name.clone(),
        email: user.email.clone(),
        created_at: user.created_at,
    }
}

/// `POST /auth/register`
pub async fn register<S: ContactStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<RegisterRequest>,
) -> ServerResult<(StatusCode, Json<RegisterResponse>)> {
    let errors = validate_register_form(&request.name, &request.email, &request.password, None);
    if !errors.is_valid() {
        return Err(ServerError::Validation(errors));
    }

    let user =
        credentials::register_user(&state.store, &request.name, &request.email, &request.password)
            .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Successfully created the account".to_string(),
            user: entity_to_api_user(&user),
        }),
    ))
}

/// `POST /auth/signin`
pub async fn signin<S: ContactStore>(
    State(state): State<Arc<AppState<S>>>,
    Json(request): Json<SigninRequest>,
) -> ServerResult<Json<SigninResponse>> {
    let (user, token) = credentials::authenticate(
        &state.store,
        &state.jwt_manager,
        &request.email,
        &request.password,
    )
    .await?;

    Ok(Json(SigninResponse {
        message: "Successfully logged in".to_string(),
        user: entity_to_api_user(&user),
        token,
    }))
}
