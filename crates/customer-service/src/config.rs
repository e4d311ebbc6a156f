//! Customer service configuration.

use common::{AppError, AppResult, DatabaseConfig, JwtConfig};

/// Customer service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// `AppError::Configuration` when `JWT_SECRET` is unset or blank.
    pub fn from_env() -> AppResult<Self> {
        Self::new(DatabaseConfig::from_env(), JwtConfig::from_env())
    }

    pub fn new(database: DatabaseConfig, jwt: JwtConfig) -> AppResult<Self> {
        if !jwt.has_secret() {
            return Err(AppError::configuration("JWT_SECRET must be set"));
        }
        Ok(Self { database, jwt })
    }
}
