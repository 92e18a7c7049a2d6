//! Account registration, superadmin seeding and login.
//!
//! No session or token is issued; login only checks the credentials.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use domain::models::user::{
    AuthResponse, LoginRequest, RegisterRequest, Registration, SeedSuperadminRequest,
};
use tracing::{info, warn};

use crate::app::AppState;
use crate::error::{method_not_allowed_fallback, ApiError};
use crate::extractors::{SeedToken, ValidatedJson};
use crate::services::accounts::{self, SeedOutcome};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/auth/register",
            post(register).fallback(method_not_allowed_fallback),
        )
        .route(
            "/api/auth/superadmin",
            post(seed_superadmin).fallback(method_not_allowed_fallback),
        )
        .route(
            "/api/auth/login",
            post(login).fallback(method_not_allowed_fallback),
        )
}

/// POST /api/auth/register
async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let registration = Registration::try_from(request)?;
    let user = accounts::register_user(&state.pool, &registration).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::new("User created", user)),
    ))
}

/// Create the superadmin account. Requires the `X-Seed-Token` header.
///
/// The body is optional; absent fields use the configured defaults.
///
/// POST /api/auth/superadmin
async fn seed_superadmin(
    State(state): State<AppState>,
    _token: SeedToken,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let request: SeedSuperadminRequest = if body.iter().all(u8::is_ascii_whitespace) {
        SeedSuperadminRequest::default()
    } else {
        serde_json::from_slice(&body)
            .map_err(|e| ApiError::Validation(format!("Invalid JSON body: {}", e)))?
    };

    let seed = &state.config.seed;
    let defaults = Registration {
        email: seed.superadmin_email.clone(),
        password: seed.superadmin_password.clone(),
        name: seed.superadmin_name.clone(),
    };
    let registration = request.with_defaults(&defaults)?;

    match accounts::seed_superadmin(&state.pool, &registration).await? {
        SeedOutcome::Created(user) => {
            info!(user_id = user.id, "Superadmin seeded");
            Ok((
                StatusCode::CREATED,
                Json(AuthResponse::new("Superadmin created", user)),
            ))
        }
        SeedOutcome::AlreadyExists(user) => Ok((
            StatusCode::OK,
            Json(AuthResponse::new("Superadmin already exists", user)),
        )),
    }
}

/// POST /api/auth/login
async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (email, password) = request.into_credentials()?;

    match accounts::authenticate(&state.pool, &email, &password).await? {
        Some(user) => {
            info!(user_id = user.id, "Login succeeded");
            Ok(Json(AuthResponse::new("Login successful", user)))
        }
        None => {
            warn!("Login failed: invalid credentials");
            Err(ApiError::Unauthorized("Invalid email or password".to_string()))
        }
    }
}
