//! HTTP route handlers.

pub mod auth;
pub mod blog;
pub mod contacts;
pub mod dashboard;
pub mod health;
pub mod profile;
pub mod public;
pub mod videos;

use crate::error::ApiError;

/// Parses a numeric path id. Non-numeric ids can never match a row.
pub(crate) fn parse_id(raw: &str, resource: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| ApiError::Validation(format!("Invalid {} id '{}'", resource, raw)))
}
