//! Q&A forum domain
//!
//! Payloads, read records and the store that forwards them to the
//! database's stored procedures.

pub mod models;
pub mod store;
pub mod target;

pub use models::{
    CommentRequest, LIST_LIMIT, PostAnswerRequest, PostQuestionRequest, QuestionRecord,
    RegisterRequest, UserRecord, VoteRequest,
};
pub use store::{ForumStore, PgForumStore, StoreError};
pub use target::{CommentCommand, PostTarget, TargetError, VoteCommand};
