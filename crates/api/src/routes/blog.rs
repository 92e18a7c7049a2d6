//! Blog post admin endpoints.
//!
//! Posts are addressed by slug, passed in the query string (GET, DELETE)
//! or in the body (PUT).

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use domain::models::blog_post::{
    BlogPost, BlogPostQuery, CreateBlogPostRequest, NewBlogPost, UpdateBlogPostRequest,
};
use persistence::repositories::BlogPostRepository;
use tracing::{info, warn};

use crate::app::AppState;
use crate::error::{method_not_allowed_fallback, ApiError};
use crate::extractors::{ValidatedJson, ValidatedQuery};
use crate::middleware::metrics::record_blog_post_created;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/admin/blog",
        get(list_or_get_posts)
            .post(create_post)
            .put(update_post)
            .delete(delete_post)
            .fallback(method_not_allowed_fallback),
    )
}

/// List all posts, or fetch one when `?slug=` is given.
///
/// GET /api/admin/blog
async fn list_or_get_posts(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<BlogPostQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = BlogPostRepository::new(state.pool.clone());

    if let Some(slug) = query.slug.filter(|s| !s.trim().is_empty()) {
        let post = repo.find_by_slug(&slug).await?.ok_or_else(|| {
            warn!(slug = %slug, "Blog post not found");
            ApiError::NotFound(format!("Post '{}' not found", slug))
        })?;
        return Ok(Json(BlogPost::from(post)).into_response());
    }

    let posts: Vec<BlogPost> = repo.list_all().await?.into_iter().map(Into::into).collect();
    Ok(Json(posts).into_response())
}

/// Create a post.
///
/// POST /api/admin/blog
async fn create_post(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateBlogPostRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let new_post = NewBlogPost::try_from(request)?;
    let repo = BlogPostRepository::new(state.pool.clone());

    let post = repo.create(&new_post).await.map_err(|e| match ApiError::from(e) {
        ApiError::Conflict(_) => {
            ApiError::Conflict(format!("Slug '{}' is already in use", new_post.slug))
        }
        other => other,
    })?;

    record_blog_post_created();
    info!(post_id = post.id, slug = %post.slug, "Blog post created");

    Ok((StatusCode::CREATED, Json(BlogPost::from(post))))
}

/// Update the post named by `slug` in the body.
///
/// PUT /api/admin/blog
async fn update_post(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<UpdateBlogPostRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (slug, changes) = request.into_parts()?;
    let repo = BlogPostRepository::new(state.pool.clone());

    let post = repo
        .update_by_slug(&slug, &changes)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Post '{}' not found", slug)))?;

    info!(post_id = post.id, slug = %post.slug, "Blog post updated");

    Ok(Json(BlogPost::from(post)))
}

/// Delete the post named by `?slug=`.
///
/// DELETE /api/admin/blog
async fn delete_post(
    State(state): State<AppState>,
    ValidatedQuery(query): ValidatedQuery<BlogPostQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let slug = query
        .slug
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("slug is required".to_string()))?;

    let repo = BlogPostRepository::new(state.pool.clone());
    if !repo.delete_by_slug(&slug).await? {
        warn!(slug = %slug, "Delete of unknown blog post");
        return Err(ApiError::NotFound(format!("Post '{}' not found", slug)));
    }

    info!(slug = %slug, "Blog post deleted");
    Ok(StatusCode::NO_CONTENT)
}
