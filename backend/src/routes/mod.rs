//! Route definitions for the FitTrack API
//!
//! Every resource router is nested under `/api/v1`; probes live at the root.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    extract::FromRequest,
    http::{header, Method, StatusCode},
    routing::get,
    Json, Router,
};
use fittrack_shared::types::ApiResponse;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

mod auth;
mod health;
mod health_profile;
mod measurement;
mod progress;
mod workout;

#[cfg(test)]
mod validation_tests;

pub use auth::auth_routes;
pub use health_profile::health_profile_routes;
pub use measurement::measurement_routes;
pub use progress::progress_routes;
pub use workout::workout_routes;

/// JSON body extractor whose rejection renders as a 400 `ApiError`
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub(crate) struct JsonBody<T>(pub T);

/// Successful handler output: status plus the `{ success, message?, data }` envelope
pub(crate) type Envelope<T> = (StatusCode, Json<ApiResponse<T>>);

pub(crate) fn ok<T>(data: T) -> Envelope<T> {
    (StatusCode::OK, Json(ApiResponse::ok(data)))
}

pub(crate) fn created<T>(message: &str, data: T) -> Envelope<T> {
    (StatusCode::CREATED, Json(ApiResponse::with_message(message, data)))
}

/// Create the main application router with all middleware
pub fn create_router(state: AppState) -> Router {
    let request_timeout = Duration::from_secs(state.config().server.request_timeout_secs);

    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/health/live", get(health::liveness_check))
        .nest("/api/v1", api_routes())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(request_timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// API v1 routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { "FitTrack API v1" }))
        .nest("/auth", auth_routes())
        .nest("/health-profile", health_profile_routes())
        .nest("/workouts", workout_routes())
        .nest("/measurements", measurement_routes())
        .nest("/progress", progress_routes())
}
