//! Contact repository for database operations.

use domain::models::NewContact;
use sqlx::PgPool;

use crate::entities::{ContactEntity, ContactStatusDb};
use crate::metrics::observe;

/// Repository for contact message database operations.
#[derive(Clone)]
pub struct ContactRepository {
    pool: PgPool,
}

impl ContactRepository {
    /// Creates a new ContactRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All messages, newest first.
    pub async fn list_all(&self) -> Result<Vec<ContactEntity>, sqlx::Error> {
        observe(
            "list_contacts",
            sqlx::query_as::<_, ContactEntity>(
                r#"
                SELECT id, name, email, phone, message, subject, status, created_at
                FROM contacts
                ORDER BY created_at DESC, id DESC
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await
    }

    /// Find a message by ID.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<ContactEntity>, sqlx::Error> {
        observe(
            "find_contact_by_id",
            sqlx::query_as::<_, ContactEntity>(
                r#"
                SELECT id, name, email, phone, message, subject, status, created_at
                FROM contacts
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await
    }

    /// Store a new message with status `novo`.
    pub async fn create(&self, contact: &NewContact) -> Result<ContactEntity, sqlx::Error> {
        observe(
            "create_contact",
            sqlx::query_as::<_, ContactEntity>(
                r#"
                INSERT INTO contacts (name, email, phone, message, subject)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING id, name, email, phone, message, subject, status, created_at
                "#,
            )
            .bind(&contact.name)
            .bind(&contact.email)
            .bind(&contact.phone)
            .bind(&contact.message)
            .bind(&contact.subject)
            .fetch_one(&self.pool),
        )
        .await
    }

    /// Set the status of a message, but only while it still has `expected`.
    ///
    /// Returns `None` when the message is gone or its status changed in the
    /// meantime.
    pub async fn update_status(
        &self,
        id: i64,
        expected: ContactStatusDb,
        status: ContactStatusDb,
    ) -> Result<Option<ContactEntity>, sqlx::Error> {
        observe(
            "update_contact_status",
            sqlx::query_as::<_, ContactEntity>(
                r#"
                UPDATE contacts SET status = $3
                WHERE id = $1 AND status = $2
                RETURNING id, name, email, phone, message, subject, status, created_at
                "#,
            )
            .bind(id)
            .bind(expected)
            .bind(status)
            .fetch_optional(&self.pool),
        )
        .await
    }

    /// Delete a message. Returns false when nothing was deleted.
    pub async fn delete(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = observe(
            "delete_contact",
            sqlx::query("DELETE FROM contacts WHERE id = $1")
                .bind(id)
                .execute(&self.pool),
        )
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
