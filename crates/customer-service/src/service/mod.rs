//! Business logic services.

mod auth_service;
mod customer_service;
mod token_issuer;

pub use auth_service::{AuthService, Authenticator, LoginResponse};
pub use customer_service::{CustomerManager, CustomerService};
pub use token_issuer::{Claims, TokenIssuer};
