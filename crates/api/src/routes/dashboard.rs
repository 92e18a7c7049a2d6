//! Admin dashboard counters.

use axum::{extract::State, response::IntoResponse, routing::get, Json, Router};
use persistence::repositories::DashboardRepository;

use crate::app::AppState;
use crate::error::{method_not_allowed_fallback, ApiError};

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/api/admin/dashboard",
        get(get_dashboard).fallback(method_not_allowed_fallback),
    )
}

/// GET /api/admin/dashboard
async fn get_dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let stats = DashboardRepository::new(state.pool.clone()).get_stats().await?;
    Ok(Json(stats))
}
