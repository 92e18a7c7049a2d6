//! Blog post repository for database operations.

use domain::models::{BlogPostChanges, NewBlogPost};
use sqlx::PgPool;

use crate::entities::BlogPostEntity;
use crate::metrics::observe;

/// Repository for blog post database operations.
#[derive(Clone)]
pub struct BlogPostRepository {
    pool: PgPool,
}

impl BlogPostRepository {
    /// Creates a new BlogPostRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All posts, newest first.
    pub async fn list_all(&self) -> Result<Vec<BlogPostEntity>, sqlx::Error> {
        observe(
            "list_blog_posts",
            sqlx::query_as::<_, BlogPostEntity>(
                r#"
                SELECT id, title, slug, summary, cover_image_url, data_ai_hint,
                       category, content, created_at
                FROM blog_posts
                ORDER BY created_at DESC, id DESC
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await
    }

    /// The `limit` most recent posts.
    pub async fn list_latest(&self, limit: i64) -> Result<Vec<BlogPostEntity>, sqlx::Error> {
        observe(
            "list_latest_blog_posts",
            sqlx::query_as::<_, BlogPostEntity>(
                r#"
                SELECT id, title, slug, summary, cover_image_url, data_ai_hint,
                       category, content, created_at
                FROM blog_posts
                ORDER BY created_at DESC, id DESC
                LIMIT $1
                "#,
            )
            .bind(limit)
            .fetch_all(&self.pool),
        )
        .await
    }

    /// Find a post by its slug.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<BlogPostEntity>, sqlx::Error> {
        observe(
            "find_blog_post_by_slug",
            sqlx::query_as::<_, BlogPostEntity>(
                r#"
                SELECT id, title, slug, summary, cover_image_url, data_ai_hint,
                       category, content, created_at
                FROM blog_posts
                WHERE slug = $1
                "#,
            )
            .bind(slug)
            .fetch_optional(&self.pool),
        )
        .await
    }

    /// Insert a post. A taken slug fails with a unique violation.
    pub async fn create(&self, post: &NewBlogPost) -> Result<BlogPostEntity, sqlx::Error> {
        observe(
            "create_blog_post",
            sqlx::query_as::<_, BlogPostEntity>(
                r#"
                INSERT INTO blog_posts (title, slug, summary, cover_image_url, data_ai_hint, category, content)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING id, title, slug, summary, cover_image_url, data_ai_hint,
                          category, content, created_at
                "#,
            )
            .bind(&post.title)
            .bind(&post.slug)
            .bind(&post.summary)
            .bind(&post.cover_image_url)
            .bind(&post.data_ai_hint)
            .bind(&post.category)
            .bind(&post.content)
            .fetch_one(&self.pool),
        )
        .await
    }

    /// Apply a partial update to the post with `slug`. Optional columns are
    /// only written when their change is present.
    ///
    /// Returns `None` when no such post exists.
    pub async fn update_by_slug(
        &self,
        slug: &str,
        changes: &BlogPostChanges,
    ) -> Result<Option<BlogPostEntity>, sqlx::Error> {
        observe(
            "update_blog_post",
            sqlx::query_as::<_, BlogPostEntity>(
                r#"
                UPDATE blog_posts SET
                    title = COALESCE($2, title),
                    summary = CASE WHEN $3 THEN $4 ELSE summary END,
                    cover_image_url = CASE WHEN $5 THEN $6 ELSE cover_image_url END,
                    data_ai_hint = CASE WHEN $7 THEN $8 ELSE data_ai_hint END,
                    category = CASE WHEN $9 THEN $10 ELSE category END,
                    content = CASE WHEN $11 THEN $12 ELSE content END
                WHERE slug = $1
                RETURNING id, title, slug, summary, cover_image_url, data_ai_hint,
                          category, content, created_at
                "#,
            )
            .bind(slug)
            .bind(&changes.title)
            .bind(changes.summary.is_some())
            .bind(changes.summary.as_ref().and_then(Option::as_deref))
            .bind(changes.cover_image_url.is_some())
            .bind(changes.cover_image_url.as_ref().and_then(Option::as_deref))
            .bind(changes.data_ai_hint.is_some())
            .bind(changes.data_ai_hint.as_ref().and_then(Option::as_deref))
            .bind(changes.category.is_some())
            .bind(changes.category.as_ref().and_then(Option::as_deref))
            .bind(changes.content.is_some())
            .bind(changes.content.as_ref().and_then(Option::as_deref))
            .fetch_optional(&self.pool),
        )
        .await
    }

    /// Delete the post with `slug`. Returns false when nothing was deleted.
    pub async fn delete_by_slug(&self, slug: &str) -> Result<bool, sqlx::Error> {
        let result = observe(
            "delete_blog_post",
            sqlx::query("DELETE FROM blog_posts WHERE slug = $1")
                .bind(slug)
                .execute(&self.pool),
        )
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
