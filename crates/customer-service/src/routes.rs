//! Route configuration.

use axum::{middleware, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{auth_routes, customer_routes, health_routes};
use crate::middleware::auth_middleware;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check (no auth)
        .nest("/health", health_routes())
        // Auth routes (no auth required)
        .nest("/auth", auth_routes())
        // Customer routes (bearer token required)
        .nest(
            "/customers",
            customer_routes().route_layer(middleware::from_fn_with_state(
                state.clone(),
                auth_middleware,
            )),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
