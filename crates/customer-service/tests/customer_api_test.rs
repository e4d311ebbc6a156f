//! End-to-end tests for the customer endpoints.

mod support;

use axum::http::{Method, StatusCode};
use serde_json::json;

use support::{customer_body, error_message, login_token, send, test_app, TEST_SECRET};

#[tokio::test]
async fn test_customer_routes_require_token() {
    let app = test_app().await;

    let (status, _) = send(&app, Method::GET, "/customers/GetAllCustomers", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(
        &app,
        Method::POST,
        "/customers/AddCustomer",
        Some("not-a-token"),
        Some(customer_body("Acme", "acme@x.com")),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::DELETE, "/customers/DeleteCustomer/1", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_rejected() {
    use jsonwebtoken::{encode, EncodingKey, Header};

    let app = test_app().await;
    let now = chrono::Utc::now().timestamp();
    let expired = encode(
        &Header::default(),
        &json!({"name": "Ann", "email": "ann@x.com", "id": 1, "iat": now - 7200, "exp": now - 3600}),
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let (status, _) = send(&app, Method::GET, "/customers/GetAllCustomers", Some(&expired), None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_empty_list_is_no_content() {
    let app = test_app().await;
    let token = login_token(&app).await;

    let (status, body) = send(&app, Method::GET, "/customers/GetAllCustomers", Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_none());
}

#[tokio::test]
async fn test_customer_lifecycle() {
    let app = test_app().await;
    let token = login_token(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/customers/AddCustomer",
        Some(&token),
        Some(customer_body("  Acme Ltd ", "acme@x.com")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()["message"], "Customer created successfully");

    let (status, body) = send(&app, Method::GET, "/customers/GetAllCustomers", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    let list = body.unwrap();
    let customers = list.as_array().unwrap();
    assert_eq!(customers.len(), 1);
    assert_eq!(customers[0]["name"], "Acme Ltd");
    let id = customers[0]["id"].as_i64().unwrap();

    let mut update = customer_body("Acme Corp", "corp@x.com");
    update["id"] = json!(id);
    let (status, body) = send(
        &app,
        Method::POST,
        "/customers/UpdateCustomer",
        Some(&token),
        Some(update),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()["message"], "Customer updated successfully");

    let (_, body) = send(&app, Method::GET, "/customers/GetAllCustomers", Some(&token), None).await;
    assert_eq!(body.unwrap()[0]["email"], "corp@x.com");

    let (status, body) = send(
        &app,
        Method::DELETE,
        &format!("/customers/DeleteCustomer/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.unwrap()["message"], "Customer deleted successfully");

    let (status, _) = send(&app, Method::GET, "/customers/GetAllCustomers", Some(&token), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_missing_customer_is_not_found() {
    let app = test_app().await;
    let token = login_token(&app).await;

    let mut update = customer_body("Ghost Co", "ghost@x.com");
    update["id"] = json!(77);
    let (status, body) = send(
        &app,
        Method::POST,
        "/customers/UpdateCustomer",
        Some(&token),
        Some(update),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), "Customer with Id 77 does not exist.");

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/customers/DeleteCustomer/77",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), "Customer with Id 77 does not exist.");
}

#[tokio::test]
async fn test_customer_validation_errors() {
    let app = test_app().await;
    let token = login_token(&app).await;

    let mut invalid = customer_body("Acme", "acme@x.com");
    invalid["contact"] = json!("12345abcde");
    let (status, body) = send(
        &app,
        Method::POST,
        "/customers/AddCustomer",
        Some(&token),
        Some(invalid),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Contact must contain only digits.");

    let (status, body) = send(&app, Method::POST, "/customers/AddCustomer", Some(&token), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Customer data is required.");

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/customers/DeleteCustomer/0",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Valid customer Id is required.");

    let (status, body) = send(
        &app,
        Method::DELETE,
        "/customers/DeleteCustomer/abc",
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Valid customer Id is required.");
}

#[tokio::test]
async fn test_duplicate_customer_email() {
    let app = test_app().await;
    let token = login_token(&app).await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/customers/AddCustomer",
        Some(&token),
        Some(customer_body("Acme", "acme@x.com")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        &app,
        Method::POST,
        "/customers/AddCustomer",
        Some(&token),
        Some(customer_body("Acme Copy", "acme@x.com")),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Email already exists.");
}
