//! Gateway error types.
//!
//! Maps forum failures to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::types::{ErrorResponse, error_codes};
use crate::forum::{StoreError, TargetError};

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Vote/comment with both or neither target. Raised before any database work.
    #[error(transparent)]
    InvalidTarget(#[from] TargetError),

    /// Body could not be parsed or failed field validation.
    #[error("{detail}")]
    MalformedBody { status: StatusCode, detail: String },

    /// Procedure call failed and was rolled back. Carries the database text.
    #[error("{0}")]
    Procedure(String),

    /// Read query failed.
    #[error("{0}")]
    Internal(String),
}

impl From<StoreError> for GatewayError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Procedure(message) => Self::Procedure(message),
            StoreError::Query(e) => Self::Internal(crate::forum::store::raw_message(&e)),
        }
    }
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidTarget(_) | Self::Procedure(_) => StatusCode::BAD_REQUEST,
            Self::MalformedBody { status, .. } => *status,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidTarget(_) => error_codes::INVALID_TARGET,
            Self::MalformedBody { .. } => error_codes::MALFORMED_BODY,
            Self::Procedure(_) => error_codes::PROCEDURE_FAILED,
            Self::Internal(_) => error_codes::INTERNAL_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            tracing::error!(detail = %detail, "Listing query failed");
        }
        let status = self.status();
        let body = ErrorResponse {
            code: self.code(),
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
