//! Video repository for database operations.

use domain::models::NewVideo;
use sqlx::PgPool;

use crate::entities::VideoEntity;
use crate::metrics::observe;

/// Repository for video database operations.
#[derive(Clone)]
pub struct VideoRepository {
    pool: PgPool,
}

impl VideoRepository {
    /// Creates a new VideoRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All videos, newest first.
    pub async fn list_all(&self) -> Result<Vec<VideoEntity>, sqlx::Error> {
        observe(
            "list_videos",
            sqlx::query_as::<_, VideoEntity>(
                r#"
                SELECT id, title, url, description, featured, created_at
                FROM videos
                ORDER BY created_at DESC, id DESC
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await
    }

    /// Up to `limit` featured videos, newest first.
    pub async fn list_featured(&self, limit: i64) -> Result<Vec<VideoEntity>, sqlx::Error> {
        observe(
            "list_featured_videos",
            sqlx::query_as::<_, VideoEntity>(
                r#"
                SELECT id, title, url, description, featured, created_at
                FROM videos
                WHERE featured = TRUE
                ORDER BY created_at DESC, id DESC
                LIMIT $1
                "#,
            )
            .bind(limit)
            .fetch_all(&self.pool),
        )
        .await
    }

    /// Insert a video, initially not featured.
    pub async fn create(&self, video: &NewVideo) -> Result<VideoEntity, sqlx::Error> {
        observe(
            "create_video",
            sqlx::query_as::<_, VideoEntity>(
                r#"
                INSERT INTO videos (title, url, description)
                VALUES ($1, $2, $3)
                RETURNING id, title, url, description, featured, created_at
                "#,
            )
            .bind(&video.title)
            .bind(&video.url)
            .bind(&video.description)
            .fetch_one(&self.pool),
        )
        .await
    }

    /// Update the featured flag and/or description of a video.
    ///
    /// `description` is `None` to keep the stored value, `Some(None)` to
    /// clear it. Returns `None` when the video does not exist.
    pub async fn update(
        &self,
        id: i64,
        featured: Option<bool>,
        description: Option<Option<&str>>,
    ) -> Result<Option<VideoEntity>, sqlx::Error> {
        observe(
            "update_video",
            sqlx::query_as::<_, VideoEntity>(
                r#"
                UPDATE videos SET
                    featured = COALESCE($2, featured),
                    description = CASE WHEN $3 THEN $4 ELSE description END
                WHERE id = $1
                RETURNING id, title, url, description, featured, created_at
                "#,
            )
            .bind(id)
            .bind(featured)
            .bind(description.is_some())
            .bind(description.flatten())
            .fetch_optional(&self.pool),
        )
        .await
    }

    /// Delete a video. Returns false when nothing was deleted.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = observe(
            "delete_video",
            sqlx::query("DELETE FROM videos WHERE id = $1")
                .bind(id)
                .execute(&self.pool),
        )
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
