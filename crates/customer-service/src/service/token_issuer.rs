//! JWT issuance and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use common::{AppError, AppResult, JwtConfig};
use domain::User;

/// JWT claims payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub name: String,
    pub email: String,
    pub id: i32,
    pub iat: i64,
    pub exp: i64,
}

/// Signs and checks HS256 tokens with a pre-shared secret.
#[derive(Clone)]
pub struct TokenIssuer {
    secret: String,
    expiration_hours: i64,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("secret", &"[REDACTED]")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

impl TokenIssuer {
    pub fn new(secret: impl Into<String>, expiration_hours: i64) -> Self {
        Self {
            secret: secret.into(),
            expiration_hours,
        }
    }

    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(config.secret.clone(), config.expiration_hours)
    }

    /// Issue a signed token carrying the user's name, email and id.
    ///
    /// # Errors
    /// `AppError::Configuration` when no secret is set.
    pub fn issue(&self, user: &User) -> AppResult<String> {
        let secret = self.secret_bytes()?;
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.expiration_hours);

        let claims = Claims {
            name: user.name.clone(),
            email: user.email.clone(),
            id: user.id,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret),
        )
        .map_err(|e| AppError::internal(format!("Token signing failed: {}", e)))
    }

    /// Check signature and expiry with no clock-skew allowance.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let secret = self.secret_bytes()?;
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &DecodingKey::from_secret(secret), &validation)?;
        Ok(token_data.claims)
    }

    fn secret_bytes(&self) -> AppResult<&[u8]> {
        if self.secret.trim().is_empty() {
            return Err(AppError::configuration("JWT secret is not configured"));
        }
        Ok(self.secret.as_bytes())
    }
}
