//! Account creation and credential checks.
//!
//! Shared by registration, superadmin seeding and login.

use domain::models::{Registration, User};
use persistence::repositories::UserRepository;
use shared::password::{hash_password, is_password_hash, verify_password, PasswordError};
use sqlx::PgPool;
use tracing::{info, warn};

/// Error types for account operations.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] PasswordError),

    #[error("A user with this email already exists")]
    EmailTaken,
}

/// Result of seeding the superadmin.
#[derive(Debug)]
pub enum SeedOutcome {
    Created(User),
    AlreadyExists(User),
}

/// Creates a new account. Fails with `EmailTaken` if the email is in use.
pub async fn register_user(pool: &PgPool, registration: &Registration) -> Result<User, AccountError> {
    let repo = UserRepository::new(pool.clone());

    if repo.find_by_email(&registration.email).await?.is_some() {
        return Err(AccountError::EmailTaken);
    }

    let password_hash = hash_password(&registration.password)?;
    let user = repo
        .create(&registration.email, &password_hash, &registration.name)
        .await
        .map_err(|e| match e {
            // Lost a race with a concurrent registration.
            sqlx::Error::Database(ref db) if db.code().as_deref() == Some("23505") => {
                AccountError::EmailTaken
            }
            other => AccountError::Database(other),
        })?;

    info!(user_id = user.id, email = %user.email, "User registered");
    Ok(user.into())
}

/// Creates the superadmin account unless one with that email exists.
///
/// Idempotent: an existing account is returned untouched.
pub async fn seed_superadmin(
    pool: &PgPool,
    registration: &Registration,
) -> Result<SeedOutcome, AccountError> {
    let repo = UserRepository::new(pool.clone());

    if let Some(existing) = repo.find_by_email(&registration.email).await? {
        info!(email = %existing.email, "Superadmin already exists - skipping seed");
        return Ok(SeedOutcome::AlreadyExists(existing.into()));
    }

    match register_user(pool, registration).await {
        Ok(user) => {
            warn!(
                email = %user.email,
                "Superadmin created. Change its password and rotate the seed token"
            );
            Ok(SeedOutcome::Created(user))
        }
        Err(AccountError::EmailTaken) => {
            let existing = repo
                .find_by_email(&registration.email)
                .await?
                .ok_or(sqlx::Error::RowNotFound)?;
            Ok(SeedOutcome::AlreadyExists(existing.into()))
        }
        Err(e) => Err(e),
    }
}

/// Returns the user when `password` matches the stored hash.
pub async fn authenticate(
    pool: &PgPool,
    email: &str,
    password: &str,
) -> Result<Option<User>, AccountError> {
    let repo = UserRepository::new(pool.clone());

    let Some(user) = repo.find_by_email(email).await? else {
        return Ok(None);
    };

    if !is_password_hash(&user.password_hash) {
        warn!(user_id = user.id, "Stored password is not a valid hash");
        return Ok(None);
    }

    Ok(verify_password(password, &user.password_hash)?.then(|| user.into()))
}
