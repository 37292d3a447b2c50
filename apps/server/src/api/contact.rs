//! Contact API endpoints.
//!
//! Every handler resolves the caller from the request extensions (populated
//! by the auth middleware) and scopes all store access by that owner id.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};
use uuid::Uuid;

use api_protocol::{
    ContactResponse, CreateContactRequest, DeleteContactResponse, ListContactsResponse,
    UpdateContactRequest,
};
use contact_store::{ContactStore, StoreError};
use entities::{Contact, ContactDraft, ContactPatch};
use validation::validate_contact_form;

use crate::error::{ServerError, ServerResult};
use crate::middleware::AuthenticatedUser;
use crate::state::AppState;

/// Converts a contact entity to its wire form.
fn entity_to_api_contact(contact: &Contact) -> api_protocol::Contact {
    api_protocol::Contact {
        id: contact.id.to_string(),
        name: contact.name.clone(),
        email: contact.email.clone(),
        phone: contact.phone.clone(),
        company: contact.company.clone(),
        notes: contact.notes.clone(),
        tags: contact.tags.clone(),
        created_at: contact.created_at,
    }
}

fn parse_contact_id(id: &str) -> ServerResult<Uuid> {
    id.parse()
        .map_err(|_| ServerError::InvalidRequest("Invalid contact id".to_string()))
}

/// `GET /contacts`
pub async fn list_contacts<S: ContactStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<AuthenticatedUser>,
) -> ServerResult<Json<ListContactsResponse>> {
    let contacts = state.store.list_contacts(user.id).await?;

    Ok(Json(ListContactsResponse {
        contacts: contacts.iter().map(entity_to_api_contact).collect(),
    }))
}

/// `POST /contacts`
pub async fn create_contact<S: ContactStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(request): Json<CreateContactRequest>,
) -> ServerResult<(StatusCode, Json<ContactResponse>)> {
    let draft = ContactDraft {
        name: request.name,
        email: request.email,
        phone: request.phone,
        company: request.company,
        notes: request.notes,
        tags: request.tags,
    };

    let errors = validate_contact_form(&draft);
    if !errors.is_valid() {
        return Err(ServerError::Validation(errors));
    }

    // Owner comes from the token, never from the body.
    let contact = state.store.create_contact(Contact::new(user.id, draft)).await?;

    tracing::info!(contact_id = %contact.id, "Contact created");

    Ok((
        StatusCode::CREATED,
        Json(ContactResponse {
            contact: entity_to_api_contact(&contact),
        }),
    ))
}

/// `PUT /contacts/:id`
pub async fn update_contact<S: ContactStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    Json(request): Json<UpdateContactRequest>,
) -> ServerResult<Json<ContactResponse>> {
    let contact_id = parse_contact_id(&id)?;

    let patch = ContactPatch {
        name: request.name,
        email: request.email,
        phone: request.phone,
        company: request.company,
        notes: request.notes,
        tags: request.tags,
    };

    // The patched record must still pass the contact form rules, so the
    // update is validated against the stored contact with the patch applied.
    let mut preview = state
        .store
        .get_contact(user.id, contact_id)
        .await?
        .ok_or_else(|| StoreError::not_found("Contact", contact_id.to_string()))?;
    preview.apply(patch.clone());

    let errors = validate_contact_form(&ContactDraft {
        name: preview.name,
        email: preview.email,
        phone: preview.phone,
        company: preview.company,
        notes: preview.notes,
        tags: preview.tags,
    });
    if !errors.is_valid() {
        return Err(ServerError::Validation(errors));
    }

    let contact = state.store.update_contact(user.id, contact_id, patch).await?;

    tracing::info!(contact_id = %contact.id, "Contact updated");

    Ok(Json(ContactResponse {
        contact: entity_to_api_contact(&contact),
    }))
}

/// `DELETE /contacts/:id`
pub async fn delete_contact<S: ContactStore>(
    State(state): State<Arc<AppState<S>>>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> ServerResult<Json<DeleteContactResponse>> {
    let contact_id = parse_contact_id(&id)?;

    state.store.delete_contact(user.id, contact_id).await?;

    tracing::info!(contact_id = %contact_id, "Contact deleted");

    Ok(Json(DeleteContactResponse {
        message: "Contact deleted successfully".to_string(),
    }))
}
