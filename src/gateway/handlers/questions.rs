//! Question handlers

use std::sync::Arc;

use axum::{Json, extract::State};

use super::super::error::GatewayError;
use super::super::state::AppState;
use super::super::types::{ErrorResponse, ItemsResponse, SuccessResponse, ValidatedJson};
use super::{AckResult, ack};
use crate::forum::{LIST_LIMIT, PostQuestionRequest, QuestionRecord};

/// Post a question
///
/// POST /questions
#[utoipa::path(
    post,
    path = "/questions",
    request_body = PostQuestionRequest,
    responses(
        (status = 200, description = "Procedure acknowledgement", body = SuccessResponse),
        (status = 400, description = "Procedure failed, e.g. unknown question_status", body = ErrorResponse),
        (status = 422, description = "Malformed body", body = ErrorResponse)
    ),
    tag = "Questions"
)]
pub async fn create_question(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<PostQuestionRequest>,
) -> AckResult {
    ack(state.store.post_question(&req).await?)
}

/// List the most recent questions
///
/// GET /questions
#[utoipa::path(
    get,
    path = "/questions",
    responses(
        (status = 200, description = "Up to 50 questions, newest first", body = ItemsResponse<QuestionRecord>),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Questions"
)]
pub async fn list_questions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ItemsResponse<QuestionRecord>>, GatewayError> {
    let questions = state.store.list_questions(LIST_LIMIT).await?;
    Ok(Json(ItemsResponse::from(questions)))
}
