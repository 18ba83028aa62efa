//! Account handlers

use std::sync::Arc;

use axum::{Json, extract::State};

use super::super::error::GatewayError;
use super::super::state::AppState;
use super::super::types::{ErrorResponse, ItemsResponse, SuccessResponse, ValidatedJson};
use super::{AckResult, ack};
use crate::forum::{LIST_LIMIT, RegisterRequest, UserRecord};

/// List the most recently joined accounts
///
/// GET /users
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Up to 50 accounts, newest first", body = ItemsResponse<UserRecord>),
        (status = 500, description = "Database error", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ItemsResponse<UserRecord>>, GatewayError> {
    let users = state.store.list_users(LIST_LIMIT).await?;
    Ok(Json(ItemsResponse::from(users)))
}

/// Register a new account
///
/// POST /users/register
#[utoipa::path(
    post,
    path = "/users/register",
    request_body = RegisterRequest,
    responses(
        (status = 200, description = "Procedure acknowledgement", body = SuccessResponse),
        (status = 400, description = "Procedure failed (constraint, enum cast, connectivity)", body = ErrorResponse),
        (status = 422, description = "Malformed body or invalid email", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn register_user(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> AckResult {
    let ok = state.store.register(&req).await?;
    if !ok {
        tracing::info!(username = %req.username, "Registration not acknowledged");
    }
    ack(ok)
}
