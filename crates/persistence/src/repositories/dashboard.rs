//! Admin dashboard counters.

use chrono::{Duration, Utc};
use domain::models::dashboard::{DashboardStats, RECENT_POSTS_DAYS};
use sqlx::{PgPool, Row};

use crate::metrics::observe;

/// Repository for dashboard aggregate queries.
#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    /// Create a new repository instance.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Count posts, contacts and featured videos in one round trip.
    pub async fn get_stats(&self) -> Result<DashboardStats, sqlx::Error> {
        let since = Utc::now() - Duration::days(RECENT_POSTS_DAYS);

        let row = observe(
            "get_dashboard_stats",
            sqlx::query(
                r#"
                SELECT
                    (SELECT COUNT(*) FROM blog_posts) as posts,
                    (SELECT COUNT(*) FROM blog_posts WHERE created_at >= $1) as posts_last_month,
                    (SELECT COUNT(*) FROM contacts) as contacts,
                    (SELECT COUNT(*) FROM contacts WHERE status <> 'respondido') as unanswered_contacts,
                    (SELECT COUNT(*) FROM videos WHERE featured = TRUE) as featured_videos
                "#,
            )
            .bind(since)
            .fetch_one(&self.pool),
        )
        .await?;

        Ok(DashboardStats {
            posts: row.get::<i64, _>("posts"),
            posts_last_month: row.get::<i64, _>("posts_last_month"),
            contacts: row.get::<i64, _>("contacts"),
            unanswered_contacts: row.get::<i64, _>("unanswered_contacts"),
            featured_videos: row.get::<i64, _>("featured_videos"),
        })
    }
}
