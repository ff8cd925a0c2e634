//! Authentication routes: register, login and the current account

use super::{created, ok, Envelope, JsonBody};
use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::services::UserService;
use crate::state::AppState;
use axum::{
    extract::State,
    routing::{get, post},
    Router,
};
use fittrack_shared::types::{AuthToken, LoginRequest, RegisterRequest, UserResponse};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(current_user))
}

/// POST /api/v1/auth/register
async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> ApiResult<Envelope<UserResponse>> {
    let user = UserService::register(state.db(), state.passwords(), req).await?;
    Ok(created("User registered successfully", user))
}

/// POST /api/v1/auth/login
async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> ApiResult<Envelope<AuthToken>> {
    let token = UserService::login(state.db(), state.jwt(), req).await?;
    Ok(ok(token))
}

/// GET /api/v1/auth/me
async fn current_user(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> ApiResult<Envelope<UserResponse>> {
    let user = UserService::current_user(state.db(), auth_user.user_id).await?;
    Ok(ok(user))
}
