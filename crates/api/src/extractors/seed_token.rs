//! Seed token header extractor.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::app::AppState;
use crate::error::ApiError;

/// The header carrying the superadmin seed token.
pub const SEED_TOKEN_HEADER: &str = "x-seed-token";

/// Proof that the request carried the configured seed token.
#[derive(Debug, Clone, Copy)]
pub struct SeedToken;

impl SeedToken {
    /// Compares the presented token with the expected one.
    pub fn check(presented: Option<&str>, expected: &str) -> Result<Self, ApiError> {
        match presented {
            Some(token) if !expected.is_empty() && constant_time_eq(token, expected) => Ok(Self),
            _ => Err(ApiError::Unauthorized("Invalid seed token".to_string())),
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for SeedToken {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let presented = parts
            .headers
            .get(SEED_TOKEN_HEADER)
            .and_then(|v| v.to_str().ok());

        SeedToken::check(presented, &state.config.seed.token).map_err(|e| {
            tracing::warn!("Rejected superadmin seed request: bad or missing seed token");
            e
        })
    }
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a
            .bytes()
            .zip(b.bytes())
            .fold(0u8, |acc, (x, y)| acc | (x ^ y))
            == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_accepts_matching_token() {
        assert!(SeedToken::check(Some("dev-seed-token"), "dev-seed-token").is_ok());
    }

    #[test]
    fn test_check_rejects_missing_or_wrong_token() {
        assert!(matches!(
            SeedToken::check(None, "dev-seed-token"),
            Err(ApiError::Unauthorized(_))
        ));
        assert!(SeedToken::check(Some("dev-seed-tokem"), "dev-seed-token").is_err());
        assert!(SeedToken::check(Some("dev"), "dev-seed-token").is_err());
    }

    #[test]
    fn test_check_rejects_when_nothing_configured() {
        assert!(SeedToken::check(Some(""), "").is_err());
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq("abc", "abc"));
        assert!(!constant_time_eq("abc", "abd"));
        assert!(!constant_time_eq("abc", "abcd"));
    }
}
