//! Domain layer - Core business entities, value objects and rules.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the user and customer records, the password codec and the field-level
//! validation rules that gate every write.

pub mod constants;
pub mod customer;
pub mod error;
pub mod password;
pub mod user;
pub mod validation;

pub use constants::*;
pub use customer::Customer;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use user::{Credentials, NewUser, User};
pub use validation::{validate, validate_customer, validate_user, Validate};
