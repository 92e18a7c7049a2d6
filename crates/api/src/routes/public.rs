//! Read models for the public site pages.

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use domain::models::home::{HomeData, HOME_FEATURED_VIDEOS, HOME_LATEST_POSTS};
use domain::models::video::VideoCard;
use domain::models::{BlogPost, Video};
use persistence::repositories::{BlogPostRepository, VideoRepository};
use sqlx::PgPool;

use crate::app::AppState;
use crate::error::{method_not_allowed_fallback, ApiError};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/home",
            get(get_home).fallback(method_not_allowed_fallback),
        )
        .route(
            "/api/videos",
            get(list_video_cards).fallback(method_not_allowed_fallback),
        )
}

/// Loads the latest posts and the featured videos for the home page.
pub async fn load_home_data(pool: &PgPool) -> Result<HomeData, sqlx::Error> {
    let posts_repo = BlogPostRepository::new(pool.clone());
    let videos_repo = VideoRepository::new(pool.clone());

    let (posts, videos) = tokio::try_join!(
        posts_repo.list_latest(HOME_LATEST_POSTS),
        videos_repo.list_featured(HOME_FEATURED_VIDEOS),
    )?;

    Ok(HomeData::from_rows(
        posts.into_iter().map(BlogPost::from).collect(),
        videos.into_iter().map(Video::from).collect(),
    ))
}

/// GET /api/home
async fn get_home(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(load_home_data(&state.pool).await?))
}

/// Every video as a display card, newest first.
///
/// GET /api/videos
async fn list_video_cards(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let repo = VideoRepository::new(state.pool.clone());
    let cards: Vec<VideoCard> = repo
        .list_all()
        .await?
        .into_iter()
        .map(|v| VideoCard::from(Video::from(v)))
        .collect();
    Ok(Json(cards))
}
