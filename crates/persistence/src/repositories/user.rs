//! User repository for database operations.

use sqlx::PgPool;

use crate::entities::UserEntity;
use crate::metrics::observe;

/// Repository for user account database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by email. Emails are stored lowercased.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>, sqlx::Error> {
        observe(
            "find_user_by_email",
            sqlx::query_as::<_, UserEntity>(
                r#"
                SELECT id, email, password_hash, name, avatar_url, created_at
                FROM users
                WHERE email = $1
                "#,
            )
            .bind(email)
            .fetch_optional(&self.pool),
        )
        .await
    }

    /// The site owner account: the user with the lowest id.
    pub async fn find_owner(&self) -> Result<Option<UserEntity>, sqlx::Error> {
        observe(
            "find_owner_user",
            sqlx::query_as::<_, UserEntity>(
                r#"
                SELECT id, email, password_hash, name, avatar_url, created_at
                FROM users
                ORDER BY id ASC
                LIMIT 1
                "#,
            )
            .fetch_optional(&self.pool),
        )
        .await
    }

    /// Create a user. A taken email fails with a unique violation.
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
    ) -> Result<UserEntity, sqlx::Error> {
        observe(
            "create_user",
            sqlx::query_as::<_, UserEntity>(
                r#"
                INSERT INTO users (email, password_hash, name)
                VALUES ($1, $2, $3)
                RETURNING id, email, password_hash, name, avatar_url, created_at
                "#,
            )
            .bind(email)
            .bind(password_hash)
            .bind(name)
            .fetch_one(&self.pool),
        )
        .await
    }

    /// Update profile fields; `None` keeps the stored value.
    pub async fn update_profile(
        &self,
        id: i64,
        name: Option<&str>,
        email: Option<&str>,
        avatar_url: Option<&str>,
    ) -> Result<Option<UserEntity>, sqlx::Error> {
        observe(
            "update_user_profile",
            sqlx::query_as::<_, UserEntity>(
                r#"
                UPDATE users SET
                    name = COALESCE($2, name),
                    email = COALESCE($3, email),
                    avatar_url = COALESCE($4, avatar_url)
                WHERE id = $1
                RETURNING id, email, password_hash, name, avatar_url, created_at
                "#,
            )
            .bind(id)
            .bind(name)
            .bind(email)
            .bind(avatar_url)
            .fetch_optional(&self.pool),
        )
        .await
    }
}
