//! Application state shared by all handlers
//!
//! Built once at start-up. Cloning is cheap: the pool and the JWT keys are
//! reference counted and the config sits behind an `Arc`.

use crate::auth::{JwtService, PasswordService};
use crate::config::AppConfig;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,
    pub config: Arc<AppConfig>,
    /// JWT service with keys derived from the configured secret
    pub jwt: JwtService,
    pub passwords: PasswordService,
}

impl AppState {
    pub fn new(db: PgPool, config: AppConfig) -> Self {
        let jwt = JwtService::new(&config.jwt.secret, config.jwt.expiry_secs);
        let passwords = PasswordService::new(config.security.bcrypt_cost);

        Self {
            db,
            config: Arc::new(config),
            jwt,
            passwords,
        }
    }

    #[inline]
    pub fn db(&self) -> &PgPool {
        &self.db
    }

    #[inline]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[inline]
    pub fn jwt(&self) -> &JwtService {
        &self.jwt
    }

    #[inline]
    pub fn passwords(&self) -> &PasswordService {
        &self.passwords
    }
}
