//! Gateway types module
//!
//! - [`extract`]: `ValidatedJson` request extractor
//! - [`response`]: response bodies and error codes

pub mod extract;
pub mod response;

pub use extract::ValidatedJson;
pub use response::{ErrorResponse, HealthResponse, ItemsResponse, SuccessResponse, error_codes};
