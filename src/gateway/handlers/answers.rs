use std::sync::Arc;

use axum::extract::State;

use super::super::state::AppState;
use super::super::types::{ErrorResponse, SuccessResponse, ValidatedJson};
use super::{AckResult, ack};
use crate::forum::PostAnswerRequest;

/// Answer a question
///
/// POST /answers
#[utoipa::path(
    post,
    path = "/answers",
    request_body = PostAnswerRequest,
    responses(
        (status = 200, description = "Procedure acknowledgement", body = SuccessResponse),
        (status = 400, description = "Procedure failed, e.g. unknown question", body = ErrorResponse),
        (status = 422, description = "Malformed body", body = ErrorResponse)
    ),
    tag = "Answers"
)]
pub async fn create_answer(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<PostAnswerRequest>,
) -> AckResult {
    ack(state.store.post_answer(&req).await?)
}
