//! User account domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::validation::require_field;
use validator::{Validate, ValidationErrors};

use super::fields::trimmed;

/// Name given to accounts registered without one.
pub const DEFAULT_USER_NAME: &str = "Usuário";

/// Represents a user account in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip_serializing)] // Never serialize password hash to API responses
    pub password_hash: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Public subset of a user returned by the auth endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: i64,
    pub email: String,
    pub name: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
        }
    }
}

/// Response body of the auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: UserSummary,
}

impl AuthResponse {
    pub fn new(message: impl Into<String>, user: impl Into<UserSummary>) -> Self {
        Self {
            message: message.into(),
            user: user.into(),
        }
    }
}

/// Request payload for `POST /api/auth/register`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegisterRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(length(max = 128, message = "Password must be at most 128 characters"))]
    pub password: Option<String>,

    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,
}

/// Credentials and name of an account about to be created.
///
/// The password is still plaintext here; hashing happens in the handler.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
}

impl TryFrom<RegisterRequest> for Registration {
    type Error = ValidationErrors;

    fn try_from(request: RegisterRequest) -> Result<Self, Self::Error> {
        let mut errors = request.validate().err().unwrap_or_else(ValidationErrors::new);
        let email = require_field(&mut errors, "email", request.email);
        let password = require_field(&mut errors, "password", request.password);

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            email: normalize_email(&email),
            password,
            name: request
                .name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty())
                .unwrap_or_else(|| DEFAULT_USER_NAME.to_string()),
        })
    }
}

/// Request payload for `POST /api/auth/superadmin`. Absent fields fall back
/// to the configured superadmin defaults.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SeedSuperadminRequest {
    #[serde(default, deserialize_with = "trimmed")]
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    #[validate(length(max = 128, message = "Password must be at most 128 characters"))]
    pub password: Option<String>,

    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,
}

impl SeedSuperadminRequest {
    /// Fills blank fields from `defaults`.
    pub fn with_defaults(self, defaults: &Registration) -> Result<Registration, ValidationErrors> {
        self.validate()?;
        let pick = |value: Option<String>, fallback: &str| {
            value
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| fallback.to_string())
        };

        Ok(Registration {
            email: normalize_email(&pick(self.email, &defaults.email)),
            password: pick(self.password, &defaults.password),
            name: pick(self.name, &defaults.name).trim().to_string(),
        })
    }
}

/// Request payload for `POST /api/auth/login`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl LoginRequest {
    /// Returns `(email, password)` or the missing-field errors.
    pub fn into_credentials(self) -> Result<(String, String), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let email = require_field(&mut errors, "email", self.email);
        let password = require_field(&mut errors, "password", self.password);
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok((normalize_email(&email), password))
    }
}

/// Changes submitted from the profile form.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct ProfileUpdate {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    /// Public URL of a freshly stored avatar.
    pub avatar_url: Option<String>,
}

impl ProfileUpdate {
    /// Drops blank text fields so they keep their stored values.
    pub fn normalized(self) -> Self {
        let keep = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        Self {
            name: keep(self.name),
            email: keep(self.email).map(|e| normalize_email(&e)),
            avatar_url: self.avatar_url,
        }
    }
}

/// Lowercases and trims an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
