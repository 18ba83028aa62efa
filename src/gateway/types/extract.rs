//! Validated JSON extractor
//!
//! Deserializes the body and runs `validator` rules before the handler
//! sees it, so handlers never receive a malformed payload.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::gateway::error::GatewayError;

#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = GatewayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // 1. Shape: axum's own status (400 syntax, 415 content type, 422 data)
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| GatewayError::MalformedBody {
                status: rejection.status(),
                detail: rejection.body_text(),
            })?;

        // 2. Field rules
        value
            .validate()
            .map_err(|errors| GatewayError::MalformedBody {
                status: axum::http::StatusCode::UNPROCESSABLE_ENTITY,
                detail: errors.to_string(),
            })?;

        Ok(Self(value))
    }
}
