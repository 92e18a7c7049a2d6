//! Video admin endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, patch},
    Json, Router,
};
use domain::models::video::{CreateVideoRequest, NewVideo, UpdateVideoRequest, Video};
use persistence::repositories::VideoRepository;
use tracing::{info, warn};
use validator::Validate;

use super::parse_id;
use crate::app::AppState;
use crate::error::{method_not_allowed_fallback, ApiError};
use crate::extractors::ValidatedJson;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/admin/video",
            get(list_videos)
                .post(create_video)
                .fallback(method_not_allowed_fallback),
        )
        .route(
            "/api/admin/video/:id",
            patch(update_video)
                .delete(delete_video)
                .fallback(method_not_allowed_fallback),
        )
}

/// GET /api/admin/video
async fn list_videos(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let repo = VideoRepository::new(state.pool.clone());
    let videos: Vec<Video> = repo.list_all().await?.into_iter().map(Into::into).collect();
    Ok(Json(videos))
}

/// POST /api/admin/video
async fn create_video(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateVideoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new_video = NewVideo::try_from(request)?;
    let repo = VideoRepository::new(state.pool.clone());
    let video = repo.create(&new_video).await?;

    info!(video_id = video.id, url = %video.url, "Video created");

    Ok((StatusCode::CREATED, Json(Video::from(video))))
}

/// Toggle `featured` and/or change the description.
///
/// PATCH /api/admin/video/:id
async fn update_video(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateVideoRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&raw_id, "video")?;
    request.validate()?;
    if request.is_empty() {
        return Err(ApiError::Validation(
            "Nothing to update: send featured and/or description".to_string(),
        ));
    }

    let repo = VideoRepository::new(state.pool.clone());
    let description = request.description.as_ref().map(|d| d.as_deref());
    let video = repo
        .update(id, request.featured, description)
        .await?
        .ok_or_else(|| {
            warn!(video_id = id, "Update of unknown video");
            ApiError::NotFound(format!("Video {} not found", id))
        })?;

    info!(
        video_id = video.id,
        featured = video.featured,
        "Video updated"
    );

    Ok(Json(Video::from(video)))
}

/// DELETE /api/admin/video/:id
async fn delete_video(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&raw_id, "video")?;
    let repo = VideoRepository::new(state.pool.clone());

    if !repo.delete(id).await? {
        warn!(video_id = id, "Delete of unknown video");
        return Err(ApiError::NotFound(format!("Video {} not found", id)));
    }

    info!(video_id = id, "Video deleted");
    Ok(StatusCode::NO_CONTENT)
}
