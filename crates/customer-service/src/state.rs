//! Application state for dependency injection.

use std::sync::Arc;

use common::JwtConfig;

use crate::infra::Database;
use crate::repository::{CustomerStore, UserStore};
use crate::service::{AuthService, Authenticator, CustomerManager, CustomerService, TokenIssuer};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub customer_service: Arc<dyn CustomerService>,
    pub db: Database,
}

impl AppState {
    /// Create new app state.
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        customer_service: Arc<dyn CustomerService>,
        db: Database,
    ) -> Self {
        Self {
            auth_service,
            customer_service,
            db,
        }
    }

    /// Wire stores and services on top of a connected database.
    pub fn from_database(db: Database, jwt: &JwtConfig) -> Self {
        let users = Arc::new(UserStore::new(db.clone()));
        let customers = Arc::new(CustomerStore::new(db.clone()));

        let auth_service = Arc::new(Authenticator::new(users, TokenIssuer::from_config(jwt)));
        let customer_service = Arc::new(CustomerManager::new(customers));

        Self::new(auth_service, customer_service, db)
    }
}
