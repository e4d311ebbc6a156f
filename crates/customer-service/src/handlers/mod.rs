//! HTTP request handlers.

mod auth_handler;
mod customer_handler;
mod health_handler;

pub use auth_handler::auth_routes;
pub use customer_handler::customer_routes;
pub use health_handler::health_routes;

use serde::Serialize;

/// Body of successful mutations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
