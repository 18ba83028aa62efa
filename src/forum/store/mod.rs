//! Forum store
//!
//! One method per gateway operation. Write methods map to exactly one stored
//! procedure call inside its own transaction and return the procedure's
//! acknowledgement.

pub mod postgres;

pub use postgres::PgForumStore;

use async_trait::async_trait;

use super::models::{PostAnswerRequest, PostQuestionRequest, QuestionRecord, RegisterRequest, UserRecord};
use super::target::{CommentCommand, VoteCommand};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A procedure call failed and its transaction was rolled back.
    /// Carries the database's own text.
    #[error("{0}")]
    Procedure(String),

    /// A read query failed.
    #[error("Database error: {0}")]
    Query(#[from] sqlx::Error),
}

impl StoreError {
    pub fn procedure(err: &sqlx::Error) -> Self {
        Self::Procedure(raw_message(err))
    }
}

/// Server-side message when there is one, otherwise the driver's description.
pub fn raw_message(err: &sqlx::Error) -> String {
    match err.as_database_error() {
        Some(db_err) => db_err.message().to_string(),
        None => err.to_string(),
    }
}

#[async_trait]
pub trait ForumStore: Send + Sync {
    /// Most recently joined accounts, newest first
    async fn list_users(&self, limit: i64) -> Result<Vec<UserRecord>, StoreError>;

    /// `register(...)`
    async fn register(&self, req: &RegisterRequest) -> Result<bool, StoreError>;

    /// `post_question(...)`
    async fn post_question(&self, req: &PostQuestionRequest) -> Result<bool, StoreError>;

    /// Most recent questions, newest first
    async fn list_questions(&self, limit: i64) -> Result<Vec<QuestionRecord>, StoreError>;

    /// `post_answer(...)`
    async fn post_answer(&self, req: &PostAnswerRequest) -> Result<bool, StoreError>;

    /// `make_vote(...)`
    async fn make_vote(&self, cmd: &VoteCommand) -> Result<bool, StoreError>;

    /// `make_comment(...)`
    async fn make_comment(&self, cmd: &CommentCommand) -> Result<bool, StoreError>;
}
