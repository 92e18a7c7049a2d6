//! Site owner profile, with avatar upload.

use axum::{
    body::Bytes,
    extract::{
        multipart::{MultipartError, MultipartRejection},
        DefaultBodyLimit, Multipart, State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use domain::models::user::{ProfileUpdate, User};
use persistence::repositories::UserRepository;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::{method_not_allowed_fallback, ApiError};
use crate::services::uploads::{AvatarStore, UploadError};

/// Slack for the non-file multipart fields and boundaries.
const FORM_OVERHEAD_BYTES: usize = 64 * 1024;

pub fn router(max_avatar_bytes: usize) -> Router<AppState> {
    Router::new().route(
        "/api/admin/perfil",
        get(get_profile)
            .post(update_profile)
            .fallback(method_not_allowed_fallback)
            .layer(DefaultBodyLimit::max(max_avatar_bytes + FORM_OVERHEAD_BYTES)),
    )
}

async fn find_owner(state: &AppState) -> Result<persistence::entities::UserEntity, ApiError> {
    UserRepository::new(state.pool.clone())
        .find_owner()
        .await?
        .ok_or_else(|| ApiError::NotFound("No user account exists yet".to_string()))
}

/// GET /api/admin/perfil
async fn get_profile(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let owner = find_owner(&state).await?;
    Ok(Json(User::from(owner)))
}

/// Multipart form with optional `name`, `email` and `avatar` (file).
///
/// POST /api/admin/perfil
async fn update_profile(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let mut multipart = multipart?;
    let owner = find_owner(&state).await?;
    let store = AvatarStore::new(&state.config.uploads);
    let to_upload_error = |e: MultipartError| multipart_error(e, store.max_bytes());

    let mut update = ProfileUpdate::default();
    let mut avatar: Option<(Option<String>, Bytes)> = None;

    while let Some(field) = multipart.next_field().await.map_err(to_upload_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("name") => update.name = Some(field.text().await.map_err(to_upload_error)?),
            Some("email") => update.email = Some(field.text().await.map_err(to_upload_error)?),
            Some("avatar") => {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field.bytes().await.map_err(to_upload_error)?;
                if !bytes.is_empty() {
                    avatar = Some((file_name, bytes));
                }
            }
            _ => {}
        }
    }

    let mut update = update.normalized();
    update.validate()?;

    if let Some((file_name, bytes)) = avatar {
        update.avatar_url = Some(store.save(owner.id, file_name.as_deref(), &bytes).await?);
    }

    let user = UserRepository::new(state.pool.clone())
        .update_profile(
            owner.id,
            update.name.as_deref(),
            update.email.as_deref(),
            update.avatar_url.as_deref(),
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("No user account exists yet".to_string()))?;

    info!(
        user_id = user.id,
        avatar_changed = update.avatar_url.is_some(),
        "Profile updated"
    );

    Ok(Json(User::from(user)))
}

fn multipart_error(err: MultipartError, limit: usize) -> UploadError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadError::TooLarge { limit }
    } else {
        UploadError::Multipart(err.body_text())
    }
}
