//! Repository layer for data access.

pub mod entities;
mod customer_repository;
mod error;
mod user_repository;

pub use customer_repository::{CustomerRepository, CustomerStore};
pub use error::{StoreError, StoreResult};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use customer_repository::MockCustomerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
