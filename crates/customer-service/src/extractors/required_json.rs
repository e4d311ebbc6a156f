//! JSON extractor that treats an absent body as a validation failure.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use common::AppError;
use domain::Validate;

/// JSON body that must be present.
///
/// An empty body or a literal `null` is reported with the payload type's
/// "data is required" message; malformed JSON becomes a validation error.
/// Field rules are left to the services.
pub struct RequiredJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for RequiredJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::validation(T::MISSING));
        }

        let Json(value) = Json::<Option<T>>::from_bytes(&body)
            .map_err(|e| AppError::validation(e.body_text()))?;

        value
            .map(RequiredJson)
            .ok_or_else(|| AppError::validation(T::MISSING))
    }
}
