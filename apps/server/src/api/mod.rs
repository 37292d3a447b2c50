//! API endpoints.

pub mod auth;
pub mod contact;

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use contact_store::ContactStore;

use crate::middleware::auth_middleware;
use crate::state::AppState;

/// Creates the API router with all endpoints.
///
/// The contact routes sit behind the bearer-token middleware; the auth
/// routes and the health check are public.
pub fn create_router<S: ContactStore + 'static>(state: Arc<AppState<S>>) -> Router {
    let protected = Router::new()
        .route("/contacts", get(contact::list_contacts).post(contact::create_contact))
        .route(
            "/contacts/:id",
            put(contact::update_contact).delete(contact::delete_contact),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware::<S>));

    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/signin", post(auth::signin))
        .merge(protected)
        .route("/health", get(health_check))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
