//! User service for registration, login and account lookup
//!
//! bcrypt work runs on the blocking thread pool; token signing uses the
//! keys already held by `JwtService`.

use crate::auth::{JwtService, PasswordService};
use crate::error::ApiError;
use crate::repositories::{CreateUser, UserRecord, UserRepository};
use fittrack_shared::types::{
    AuthToken, Credentials, LoginRequest, NewAccount, RegisterRequest, UserResponse,
};
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

const EMAIL_TAKEN: &str = "Email already registered";

impl From<UserRecord> for UserResponse {
    fn from(user: UserRecord) -> Self {
        UserResponse {
            id: user.id,
            name: user.name,
            email: user.email,
            role_id: user.role_id,
            created_at: user.created_at,
        }
    }
}

pub struct UserService;

impl UserService {
    /// Register a new account; the email must not already be taken
    pub async fn register(
        pool: &PgPool,
        passwords: &PasswordService,
        request: RegisterRequest,
    ) -> Result<UserResponse, ApiError> {
        let NewAccount {
            name,
            email,
            password,
            role_id,
        } = request.into_account()?;

        if UserRepository::email_exists(pool, &email)
            .await
            .map_err(ApiError::Internal)?
        {
            return Err(ApiError::Conflict(EMAIL_TAKEN.to_string()));
        }

        let password_hash = passwords
            .hash_async(password)
            .await
            .map_err(ApiError::Internal)?;

        let user = UserRepository::create(
            pool,
            CreateUser {
                name,
                email,
                password_hash,
                role_id,
            },
        )
        .await
        .map_err(|e| ApiError::from_insert(e, EMAIL_TAKEN))?;

        info!(user_id = %user.id, role_id = user.role_id, "User registered");
        Ok(user.into())
    }

    /// Exchange email and password for an access token
    pub async fn login(
        pool: &PgPool,
        jwt_service: &JwtService,
        request: LoginRequest,
    ) -> Result<AuthToken, ApiError> {
        let Credentials { email, password } = request.into_credentials()?;

        let Some(user) = UserRepository::find_by_email(pool, &email)
            .await
            .map_err(ApiError::Internal)?
        else {
            warn!("Login attempt for unknown email");
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        };

        let valid = PasswordService::verify_async(password, user.password_hash.clone())
            .await
            .map_err(ApiError::Internal)?;

        if !valid {
            warn!(user_id = %user.id, "Login failed: wrong password");
            return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
        }

        let access_token = jwt_service
            .generate_access_token(user.id, user.role_id)
            .map_err(ApiError::Internal)?;

        info!(user_id = %user.id, "User logged in");
        Ok(AuthToken {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in: jwt_service.expiry_secs(),
        })
    }

    /// Account of the authenticated caller
    pub async fn current_user(pool: &PgPool, user_id: Uuid) -> Result<UserResponse, ApiError> {
        UserRepository::find_by_id(pool, user_id)
            .await
            .map_err(ApiError::Internal)?
            .map(UserResponse::from)
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
    }
}
