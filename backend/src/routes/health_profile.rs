//! Health profile routes

use super::{created, ok, Envelope, JsonBody};
use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::health_profile::{HealthProfileService, PROFILE_SAVED};
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use fittrack_shared::types::{HealthProfileRequest, HealthProfileResponse};

pub fn health_profile_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(latest_profile).post(save_profile))
        .route("/calculate", post(calculate))
}

/// POST /api/v1/health-profile
async fn save_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
    JsonBody(req): JsonBody<HealthProfileRequest>,
) -> ApiResult<Envelope<HealthProfileResponse>> {
    let profile = HealthProfileService::save(state.db(), auth_user.user_id, req).await?;
    Ok(created(PROFILE_SAVED, profile))
}

/// GET /api/v1/health-profile
async fn latest_profile(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Envelope<HealthProfileResponse>> {
    let profile = HealthProfileService::latest(state.db(), auth_user.user_id).await?;
    Ok(ok(profile))
}

/// POST /api/v1/health-profile/calculate
///
/// Stateless preview for the intake form; nothing is stored.
async fn calculate(
    JsonBody(req): JsonBody<HealthProfileRequest>,
) -> ApiResult<Envelope<HealthProfileResponse>> {
    Ok(ok(HealthProfileService::preview(req)?))
}
