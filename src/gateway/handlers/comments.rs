use std::sync::Arc;

use axum::extract::State;

use super::super::state::AppState;
use super::super::types::{ErrorResponse, SuccessResponse, ValidatedJson};
use super::{AckResult, ack};
use crate::forum::{CommentCommand, CommentRequest};

/// Comment on a question or an answer
///
/// POST /comments
#[utoipa::path(
    post,
    path = "/comments",
    request_body = CommentRequest,
    responses(
        (status = 200, description = "Procedure acknowledgement", body = SuccessResponse),
        (status = 400, description = "Both or neither target set, or procedure failed", body = ErrorResponse),
        (status = 422, description = "Malformed body", body = ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<CommentRequest>,
) -> AckResult {
    let cmd = CommentCommand::try_from(req).inspect_err(|_| {
        tracing::debug!("Comment rejected: target not exclusive");
    })?;
    ack(state.store.make_comment(&cmd).await?)
}
