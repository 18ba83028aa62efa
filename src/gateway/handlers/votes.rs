use std::sync::Arc;

use axum::extract::State;

use super::super::state::AppState;
use super::super::types::{ErrorResponse, SuccessResponse, ValidatedJson};
use super::{AckResult, ack};
use crate::forum::{VoteCommand, VoteRequest};

/// Vote on a question or an answer
///
/// POST /votes
///
/// Exactly one of `question_id` / `answer_id` must be set; otherwise the
/// request is rejected without touching the database.
#[utoipa::path(
    post,
    path = "/votes",
    request_body = VoteRequest,
    responses(
        (status = 200, description = "Procedure acknowledgement", body = SuccessResponse),
        (status = 400, description = "Both or neither target set, or procedure failed", body = ErrorResponse),
        (status = 422, description = "Malformed body", body = ErrorResponse)
    ),
    tag = "Votes"
)]
pub async fn cast_vote(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<VoteRequest>,
) -> AckResult {
    let cmd = VoteCommand::try_from(req).inspect_err(|_| {
        tracing::debug!("Vote rejected: target not exclusive");
    })?;
    ack(state.store.make_vote(&cmd).await?)
}
