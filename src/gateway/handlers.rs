//! HTTP handlers
//!
//! Each write handler forwards its payload to exactly one store call.

pub mod answers;
pub mod comments;
pub mod health;
pub mod questions;
pub mod users;
pub mod votes;

pub use answers::create_answer;
pub use comments::create_comment;
pub use health::health_check;
pub use questions::{create_question, list_questions};
pub use users::{list_users, register_user};
pub use votes::cast_vote;

use axum::Json;

use super::error::GatewayError;
use super::types::SuccessResponse;

/// Handler result for write endpoints
pub type AckResult = Result<Json<SuccessResponse>, GatewayError>;

fn ack(ok: bool) -> AckResult {
    Ok(Json(SuccessResponse::from(ok)))
}
