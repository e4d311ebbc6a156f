//! Authentication service - registration, login and token checks.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use common::{AppError, AppResult};
use domain::{validate, validate_user, Credentials, NewUser, Password};

use super::token_issuer::{Claims, TokenIssuer};
use crate::repository::UserRepository;

/// Hash verified when the email is unknown, so both failure paths cost the same.
static DUMMY_PASSWORD: Lazy<Option<Password>> =
    Lazy::new(|| Password::new("timing-equalization-only").ok());

/// Token returned after successful authentication
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Validate, hash and store a new user
    async fn register(&self, input: NewUser) -> AppResult<()>;

    /// Check credentials and issue a token
    async fn login(&self, credentials: Credentials) -> AppResult<LoginResponse>;

    /// Verify a bearer token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of AuthService backed by the user store.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    issuer: TokenIssuer,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, issuer: TokenIssuer) -> Self {
        Self { users, issuer }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn register(&self, input: NewUser) -> AppResult<()> {
        let input = validate_user(Some(&input)).map_err(|e| {
            warn!(reason = %e, "Registration rejected");
            AppError::from(e)
        })?;

        let password_hash = Password::new(&input.password)?.into_string();
        let email = input.email.trim().to_string();

        let rows = self
            .users
            .insert(input.name.trim().to_string(), email.clone(), password_hash)
            .await?;

        if rows == 0 {
            error!(%email, "User insert affected no rows");
            return Err(AppError::internal("User registration failed."));
        }

        info!(%email, "User registered");
        Ok(())
    }

    async fn login(&self, credentials: Credentials) -> AppResult<LoginResponse> {
        validate(Some(&credentials))?;

        let email = credentials.email.trim();
        let user = self.users.find_by_email(email).await?;

        // Verify even when the user doesn't exist; timing must not reveal registered emails
        let password_valid = match &user {
            Some(user) => {
                Password::from_hash(user.password_hash.as_str()).verify(&credentials.password)
            }
            None => {
                if let Some(dummy) = DUMMY_PASSWORD.as_ref() {
                    dummy.verify(&credentials.password);
                }
                false
            }
        };

        let user = match user {
            Some(user) if password_valid => user,
            _ => {
                warn!(%email, "Login failed");
                return Err(AppError::InvalidCredentials);
            }
        };

        let token = self.issuer.issue(&user)?;
        info!(user_id = user.id, "User logged in");

        Ok(LoginResponse { token })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        self.issuer.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{MockUserRepository, StoreError};
    use domain::User;

    const SECRET: &str = "test-secret-key-for-testing-only-32chars";

    fn authenticator(repo: MockUserRepository) -> Authenticator {
        Authenticator::new(Arc::new(repo), TokenIssuer::new(SECRET, 1))
    }

    fn new_user() -> NewUser {
        NewUser {
            name: " Ann ".to_string(),
            email: " ann@x.com ".to_string(),
            password: "secret1".to_string(),
        }
    }

    fn stored_user(password: &str) -> User {
        User {
            id: 5,
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            password_hash: Password::new(password).unwrap().into_string(),
        }
    }

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_stores_trimmed_values_and_hash() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .withf(|name, email, hash| {
                name == "Ann"
                    && email == "ann@x.com"
                    && hash != "secret1"
                    && Password::from_hash(hash.as_str()).verify("secret1")
            })
            .times(1)
            .returning(|_, _, _| Ok(1));

        authenticator(repo).register(new_user()).await.unwrap();
    }

    #[tokio::test]
    async fn test_register_validation_skips_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert().never();

        let mut input = new_user();
        input.password = "abc".to_string();

        let err = authenticator(repo).register(input).await.unwrap_err();
        assert!(
            matches!(err, AppError::Validation(ref m) if m == "Password must be at least 6 characters.")
        );
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert()
            .returning(|_, _, _| Err(StoreError::DuplicateKey("Users.Email".to_string())));

        let err = authenticator(repo).register(new_user()).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Email already exists."));
    }

    #[tokio::test]
    async fn test_register_zero_rows_is_internal() {
        let mut repo = MockUserRepository::new();
        repo.expect_insert().returning(|_, _, _| Ok(0));

        let err = authenticator(repo).register(new_user()).await.unwrap_err();
        assert!(matches!(err, AppError::Internal(ref m) if m == "User registration failed."));
    }

    #[tokio::test]
    async fn test_login_issues_verifiable_token() {
        let user = stored_user("secret1");
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "ann@x.com")
            .returning(move |_| Ok(Some(user.clone())));

        let service = authenticator(repo);
        let response = service
            .login(credentials("  ann@x.com ", "secret1"))
            .await
            .unwrap();

        let claims = service.verify_token(&response.token).unwrap();
        assert_eq!(claims.id, 5);
        assert_eq!(claims.email, "ann@x.com");
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_email_look_the_same() {
        let user = stored_user("secret1");
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .withf(|email| email == "ann@x.com")
            .returning(move |_| Ok(Some(user.clone())));
        repo.expect_find_by_email()
            .withf(|email| email == "nobody@x.com")
            .returning(|_| Ok(None));

        let service = authenticator(repo);
        let wrong_password = service
            .login(credentials("ann@x.com", "wrong-password"))
            .await
            .unwrap_err();
        let unknown_email = service
            .login(credentials("nobody@x.com", "secret1"))
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AppError::InvalidCredentials));
        assert!(matches!(unknown_email, AppError::InvalidCredentials));
        assert_eq!(wrong_password.user_message(), unknown_email.user_message());
    }

    #[tokio::test]
    async fn test_login_blank_fields_skip_store() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email().never();

        let err = authenticator(repo)
            .login(credentials("ann@x.com", "  "))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(ref m) if m == "Email and password are required."));
    }

    #[tokio::test]
    async fn test_login_without_secret_is_configuration_error() {
        let user = stored_user("secret1");
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_email()
            .returning(move |_| Ok(Some(user.clone())));

        let service = Authenticator::new(Arc::new(repo), TokenIssuer::new("", 1));
        let err = service
            .login(credentials("ann@x.com", "secret1"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Configuration(_)));
    }
}
