//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};

use common::{AppError, AppResult};
use domain::{Credentials, NewUser};

use super::MessageResponse;
use crate::extractors::RequiredJson;
use crate::service::LoginResponse;
use crate::state::AppState;

/// Create auth routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/registerUser", post(register))
        .route("/loginUser", post(login))
}

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    RequiredJson(input): RequiredJson<NewUser>,
) -> AppResult<Json<MessageResponse>> {
    state.auth_service.register(input).await?;
    Ok(Json(MessageResponse::new("User registered successfully")))
}

/// Login and receive a token.
///
/// Every client error here is a 401, including malformed input.
pub async fn login(
    State(state): State<AppState>,
    body: Result<RequiredJson<Credentials>, AppError>,
) -> AppResult<Json<LoginResponse>> {
    let RequiredJson(credentials) = body.map_err(AppError::into_unauthenticated)?;

    state
        .auth_service
        .login(credentials)
        .await
        .map(Json)
        .map_err(AppError::into_unauthenticated)
}
