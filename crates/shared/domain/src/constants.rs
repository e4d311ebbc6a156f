//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Minimum customer name length requirement
pub const MIN_CUSTOMER_NAME_LENGTH: usize = 3;

/// Minimum number of digits in a customer contact number
pub const MIN_CONTACT_LENGTH: usize = 10;

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 1;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

// =============================================================================
// Messages
// =============================================================================

/// Reported for both unknown emails and wrong passwords
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials.";

/// Reported when a uniqueness constraint on an email column is violated
pub const EMAIL_EXISTS_MESSAGE: &str = "Email already exists.";
