//! Workout plan routes

use super::{created, ok, Envelope, JsonBody};
use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::workout::{WorkoutService, PLAN_GENERATED};
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use fittrack_shared::types::{GeneratePlanRequest, WorkoutPlanResponse};

pub fn workout_routes() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate))
        .route("/latest", get(latest))
}

/// POST /api/v1/workouts/generate
async fn generate(
    State(state): State<AppState>,
    auth_user: AuthUser,
    JsonBody(req): JsonBody<GeneratePlanRequest>,
) -> ApiResult<Envelope<WorkoutPlanResponse>> {
    let plan = WorkoutService::generate(state.db(), auth_user.user_id, req).await?;
    Ok(created(PLAN_GENERATED, plan))
}

/// GET /api/v1/workouts/latest
async fn latest(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Envelope<WorkoutPlanResponse>> {
    Ok(ok(WorkoutService::latest(state.db(), auth_user.user_id).await?))
}
