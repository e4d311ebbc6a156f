//! Customer handlers.

use axum::{
    extract::{rejection::PathRejection, Extension, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{delete, get, post},
    Router,
};

use common::{AppError, AppResult};
use domain::Customer;

use super::MessageResponse;
use crate::extractors::RequiredJson;
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// Create customer routes
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/GetAllCustomers", get(list_customers))
        .route("/AddCustomer", post(add_customer))
        .route("/UpdateCustomer", post(update_customer))
        .route("/DeleteCustomer/:id", delete(delete_customer))
}

/// List all customers; 204 when there are none
pub async fn list_customers(State(state): State<AppState>) -> AppResult<Response> {
    let customers = state.customer_service.list_customers().await?;

    if customers.is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    Ok(Json(customers).into_response())
}

pub async fn add_customer(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    RequiredJson(input): RequiredJson<Customer>,
) -> AppResult<Json<MessageResponse>> {
    tracing::debug!(user_id = current_user.id, "Adding customer");
    state.customer_service.create_customer(input).await?;
    Ok(Json(MessageResponse::new("Customer created successfully")))
}

pub async fn update_customer(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    RequiredJson(input): RequiredJson<Customer>,
) -> AppResult<Json<MessageResponse>> {
    tracing::debug!(user_id = current_user.id, customer_id = input.id, "Updating customer");
    state.customer_service.update_customer(input).await?;
    Ok(Json(MessageResponse::new("Customer updated successfully")))
}

pub async fn delete_customer(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> AppResult<Json<MessageResponse>> {
    let Path(id) = id.map_err(|_| AppError::validation("Valid customer Id is required."))?;

    tracing::debug!(user_id = current_user.id, customer_id = id, "Deleting customer");
    state.customer_service.delete_customer(id).await?;
    Ok(Json(MessageResponse::new("Customer deleted successfully")))
}
