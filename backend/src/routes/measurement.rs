//! Body measurement routes

use super::{created, ok, Envelope, JsonBody};
use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::measurement::{MeasurementService, MEASUREMENTS_SAVED};
use crate::state::AppState;
use axum::{extract::State, routing::get, Router};
use fittrack_shared::types::{MeasurementRequest, MeasurementResponse};
use fittrack_shared::MeasurementSummary;

pub fn measurement_routes() -> Router<AppState> {
    Router::new().route("/", get(summary).post(record))
}

/// POST /api/v1/measurements
async fn record(
    State(state): State<AppState>,
    auth_user: AuthUser,
    JsonBody(req): JsonBody<MeasurementRequest>,
) -> ApiResult<Envelope<MeasurementResponse>> {
    let measurement = MeasurementService::record(state.db(), auth_user.user_id, req).await?;
    Ok(created(MEASUREMENTS_SAVED, measurement))
}

/// GET /api/v1/measurements
async fn summary(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Envelope<MeasurementSummary>> {
    Ok(ok(MeasurementService::summary(state.db(), auth_user.user_id).await?))
}
