//! Contact form submission and admin message handling.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use domain::models::contact::{
    Contact, ContactStatus, CreateContactRequest, NewContact, UpdateContactStatusRequest,
};
use persistence::repositories::ContactRepository;
use tracing::{info, warn};

use super::parse_id;
use crate::app::AppState;
use crate::error::{method_not_allowed_fallback, ApiError};
use crate::extractors::ValidatedJson;
use crate::middleware::metrics::record_contact_received;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/admin/contact",
            get(list_contacts)
                .post(create_contact)
                .fallback(method_not_allowed_fallback),
        )
        .route(
            "/api/admin/contact/:id",
            patch(update_contact_status)
                .delete(delete_contact)
                .fallback(method_not_allowed_fallback),
        )
}

/// GET /api/admin/contact
async fn list_contacts(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let repo = ContactRepository::new(state.pool.clone());
    let contacts: Vec<Contact> = repo.list_all().await?.into_iter().map(Into::into).collect();
    Ok(Json(contacts))
}

/// Public contact form. The message always starts as `novo`.
///
/// POST /api/admin/contact
async fn create_contact(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateContactRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new_contact = NewContact::try_from(request)?;
    let repo = ContactRepository::new(state.pool.clone());
    let contact = repo.create(&new_contact).await?;

    record_contact_received();
    info!(contact_id = contact.id, "Contact message received");

    Ok((StatusCode::CREATED, Json(Contact::from(contact))))
}

/// Advance the status of a message.
///
/// PATCH /api/admin/contact/:id
async fn update_contact_status(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateContactStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&raw_id, "contact")?;
    let next: ContactStatus = request
        .status
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("status is required".to_string()))?
        .parse()?;

    let repo = ContactRepository::new(state.pool.clone());
    let current = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Contact {} not found", id)))?;

    let current_status = ContactStatus::from(current.status);
    current_status.transition_to(next)?;
    if current_status == next {
        return Ok(Json(Contact::from(current)));
    }

    let updated = match repo.update_status(id, current.status, next.into()).await? {
        Some(updated) => updated,
        None => {
            // Deleted or changed by someone else since it was read.
            let fresh = repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| ApiError::NotFound(format!("Contact {} not found", id)))?;
            let fresh_status = ContactStatus::from(fresh.status);
            fresh_status.transition_to(next)?;
            if fresh_status != next {
                warn!(contact_id = id, "Concurrent contact status change");
                return Err(ApiError::Conflict(
                    "Contact status changed concurrently, retry".to_string(),
                ));
            }
            fresh
        }
    };

    info!(
        contact_id = id,
        from = %current_status,
        to = %next,
        "Contact status updated"
    );

    Ok(Json(Contact::from(updated)))
}

/// DELETE /api/admin/contact/:id
async fn delete_contact(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&raw_id, "contact")?;
    let repo = ContactRepository::new(state.pool.clone());

    if !repo.delete(id).await? {
        warn!(contact_id = id, "Delete of unknown contact");
        return Err(ApiError::NotFound(format!("Contact {} not found", id)));
    }

    info!(contact_id = id, "Contact deleted");
    Ok(StatusCode::NO_CONTENT)
}
