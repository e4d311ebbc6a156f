//! Field-level validation rules gating every write.
//!
//! Rules run in a fixed order and stop at the first violation; the returned
//! [`DomainError::Validation`] carries the single message that surfaced.

use validator::ValidateEmail;

use crate::constants::{MIN_CONTACT_LENGTH, MIN_CUSTOMER_NAME_LENGTH, MIN_PASSWORD_LENGTH};
use crate::customer::Customer;
use crate::error::{DomainError, DomainResult};
use crate::user::{Credentials, NewUser};

/// A payload with an ordered, fail-fast rule set.
pub trait Validate {
    /// Message reported when no payload was supplied at all.
    const MISSING: &'static str;

    /// Check the fields of a present payload.
    fn validate_fields(&self) -> DomainResult<()>;
}

/// Validate an optional payload: absence is the first rule.
pub fn validate<T: Validate>(input: Option<&T>) -> DomainResult<&T> {
    let value = input.ok_or_else(|| DomainError::validation(T::MISSING))?;
    value.validate_fields()?;
    Ok(value)
}

/// Registration rule set.
pub fn validate_user(input: Option<&NewUser>) -> DomainResult<&NewUser> {
    validate(input)
}

/// Customer rule set, shared by create and update.
pub fn validate_customer(input: Option<&Customer>) -> DomainResult<&Customer> {
    validate(input)
}

impl Validate for NewUser {
    const MISSING: &'static str = "User data is required.";

    fn validate_fields(&self) -> DomainResult<()> {
        require(!is_blank(&self.name), "Name is required.")?;
        require(!is_blank(&self.email), "Email is required.")?;
        // Surrounding whitespace is tolerated here; the address is stored trimmed
        require(is_valid_email(self.email.trim()), "Invalid email format.")?;
        require(!is_blank(&self.password), "Password is required.")?;
        require(
            self.password.chars().count() >= MIN_PASSWORD_LENGTH,
            "Password must be at least 6 characters.",
        )
    }
}

impl Validate for Credentials {
    const MISSING: &'static str = "Email and password are required.";

    fn validate_fields(&self) -> DomainResult<()> {
        require(self.is_complete(), Self::MISSING)
    }
}

impl Validate for Customer {
    const MISSING: &'static str = "Customer data is required.";

    fn validate_fields(&self) -> DomainResult<()> {
        require(!is_blank(&self.name), "Customer name is required.")?;
        require(
            self.name.chars().count() >= MIN_CUSTOMER_NAME_LENGTH,
            "Customer name must be at least 3 characters.",
        )?;
        require(!is_blank(&self.contact), "Contact number is required.")?;
        require(
            self.contact.chars().all(|c| c.is_ascii_digit()),
            "Contact must contain only digits.",
        )?;
        require(
            self.contact.chars().count() >= MIN_CONTACT_LENGTH,
            "Contact must be at least 10 digits.",
        )?;
        require(!is_blank(&self.city), "City is required.")?;
        require(!is_blank(&self.email), "Email is required.")?;
        require(is_valid_email(&self.email), "Invalid email format.")
    }
}

fn require(condition: bool, message: &str) -> DomainResult<()> {
    if condition {
        Ok(())
    } else {
        Err(DomainError::validation(message))
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn is_valid_email(value: &str) -> bool {
    value.validate_email()
}
