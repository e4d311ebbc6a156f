//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::{ConnectOptions, ConnectionTrait, Database as SeaDatabase, EntityTrait, Schema};
use serde_json::{json, Value};
use tower::ServiceExt;

use common::JwtConfig;
use customer_service_lib::{
    infra::Database,
    repository::entities::{customer, user},
    routes::create_router,
    state::AppState,
};

pub const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";

/// In-memory SQLite database with a single pooled connection.
///
/// A scope that failed to release its connection makes the next call hit the
/// acquire timeout.
pub async fn test_database() -> Database {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(2))
        .sqlx_logging(false);

    let connection = SeaDatabase::connect(options).await.unwrap();
    create_table(&connection, user::Entity).await;
    create_table(&connection, customer::Entity).await;

    Database::from_connection(connection)
}

async fn create_table<E: EntityTrait>(connection: &sea_orm::DatabaseConnection, entity: E) {
    let backend = connection.get_database_backend();
    let statement = Schema::new(backend).create_table_from_entity(entity);
    connection.execute(backend.build(&statement)).await.unwrap();
}

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        expiration_hours: 1,
    }
}

pub async fn test_app() -> Router {
    create_router(AppState::from_database(test_database().await, &jwt_config()))
}

/// Send a request and return the status and parsed JSON body (if any).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Option<Value>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let json = if bytes.is_empty() {
        None
    } else {
        Some(serde_json::from_slice(&bytes).unwrap())
    };

    (status, json)
}

pub fn error_message(body: &Option<Value>) -> &str {
    body.as_ref()
        .and_then(|b| b["error"]["message"].as_str())
        .unwrap_or_default()
}

pub fn customer_body(name: &str, email: &str) -> Value {
    json!({
        "name": name,
        "contact": "9876543210",
        "city": "Pune",
        "email": email,
    })
}

/// Register a user and return a fresh bearer token.
pub async fn login_token(app: &Router) -> String {
    let (status, _) = send(
        app,
        Method::POST,
        "/auth/registerUser",
        None,
        Some(json!({"name": "Ann", "email": "ann@example.com", "password": "secret1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        app,
        Method::POST,
        "/auth/loginUser",
        None,
        Some(json!({"email": "ann@example.com", "password": "secret1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    body.unwrap()["token"].as_str().unwrap().to_string()
}
