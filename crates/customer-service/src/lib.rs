//! Customer Service Library
//!
//! HTTP API for user registration, login and customer records, backed by a
//! relational store through SeaORM.

pub mod cli;
pub mod config;
pub mod extractors;
pub mod handlers;
pub mod infra;
pub mod middleware;
pub mod repository;
pub mod routes;
pub mod service;
pub mod state;

use std::net::SocketAddr;

use tracing::info;

use crate::config::Config;
use crate::infra::Database;
use crate::routes::create_router;
use crate::state::AppState;

/// Connect to the database and serve HTTP until the process is stopped.
pub async fn run_server(
    host: &str,
    port: u16,
    config: Config,
) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize database
    let db = Database::connect(&config.database).await?;

    // Create app state and router
    let state = AppState::from_database(db, &config.jwt);
    let app = create_router(state);

    // Build address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Customer service listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
