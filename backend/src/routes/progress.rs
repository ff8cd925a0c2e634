//! Weekly progress routes

use super::{created, ok, Envelope, JsonBody};
use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::progress::{ProgressService, PROGRESS_LOGGED};
use crate::state::AppState;
use axum::{extract::State, routing::get, Router};
use fittrack_shared::types::{ProgressLogRequest, ProgressLogResponse};
use fittrack_shared::ProgressSummary;

pub fn progress_routes() -> Router<AppState> {
    Router::new().route("/", get(summary).post(log_week))
}

/// POST /api/v1/progress
async fn log_week(
    State(state): State<AppState>,
    auth_user: AuthUser,
    JsonBody(req): JsonBody<ProgressLogRequest>,
) -> ApiResult<Envelope<ProgressLogResponse>> {
    let entry = ProgressService::log_week(state.db(), auth_user.user_id, req).await?;
    Ok(created(PROGRESS_LOGGED, entry))
}

/// GET /api/v1/progress
///
/// With no logs the data is `{ "message": "No progress data found" }`.
async fn summary(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Envelope<ProgressSummary>> {
    Ok(ok(ProgressService::summary(state.db(), auth_user.user_id).await?))
}
