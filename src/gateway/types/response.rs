//! Response bodies and error codes
//!
//! Success bodies use the forum's wire shapes (`{status}`, `{items}`,
//! `{success}`); errors are `{code, detail}`.

use serde::Serialize;
use utoipa::ToSchema;

/// `GET /health` body
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: &'static str,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

/// Listing wrapper
#[derive(Debug, Serialize, ToSchema)]
pub struct ItemsResponse<T> {
    pub items: Vec<T>,
}

impl<T> From<Vec<T>> for ItemsResponse<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

/// Procedure acknowledgement
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    #[schema(example = true)]
    pub success: bool,
}

impl From<bool> for SuccessResponse {
    fn from(success: bool) -> Self {
        Self { success }
    }
}

/// Error body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "INVALID_TARGET")]
    pub code: &'static str,
    #[schema(example = "Provide exactly one of question_id or answer_id")]
    pub detail: String,
}

/// Error codes carried in [`ErrorResponse::code`]
pub mod error_codes {
    // Client errors
    pub const INVALID_TARGET: &str = "INVALID_TARGET";
    pub const PROCEDURE_FAILED: &str = "PROCEDURE_FAILED";
    pub const MALFORMED_BODY: &str = "MALFORMED_BODY";

    // Server errors
    pub const INTERNAL_ERROR: &str = "INTERNAL_ERROR";
}
