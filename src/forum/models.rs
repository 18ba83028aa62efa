//! Request payloads and read records for the forum API

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Maximum number of rows returned by the listing endpoints.
pub const LIST_LIMIT: i64 = 50;

fn default_user_status() -> String {
    "active".to_string()
}

fn default_question_status() -> String {
    "open".to_string()
}

// ============================================================================
// Write payloads
// ============================================================================

/// Account registration
///
/// `birth_date`, `gender` and `status` are passed through as text and cast
/// by the database (`date`, `char(1)`, `user_status`).
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[validate(email)]
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "ada")]
    pub username: String,
    #[schema(example = "correct horse battery staple")]
    pub password: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    /// YYYY-MM-DD
    #[serde(default)]
    #[schema(example = "1815-12-10")]
    pub birth_date: Option<String>,
    /// Single character code, e.g. "F"
    #[serde(default)]
    #[schema(example = "F")]
    pub gender: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    /// Must be a member of the `user_status` enum
    #[serde(default = "default_user_status")]
    #[schema(example = "active")]
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PostQuestionRequest {
    #[schema(example = 1)]
    pub author_id: i64,
    #[schema(example = "How do lifetimes work?")]
    pub title: String,
    pub body: String,
    /// Must be a member of the `question_status` enum
    #[serde(default = "default_question_status")]
    #[schema(example = "open")]
    pub status: String,
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct PostAnswerRequest {
    #[schema(example = 1)]
    pub question_id: i64,
    #[schema(example = 2)]
    pub author_id: i64,
    pub body: String,
}

/// Vote on a question or an answer. Exactly one target must be set.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct VoteRequest {
    #[schema(example = 3)]
    pub voter_id: i64,
    #[serde(default)]
    pub question_id: Option<i64>,
    #[serde(default)]
    pub answer_id: Option<i64>,
    /// Usually 1 or -1
    #[schema(example = 1)]
    pub vote: i64,
}

/// Comment on a question or an answer. Exactly one target must be set.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CommentRequest {
    #[schema(example = 3)]
    pub author_id: i64,
    #[serde(default)]
    pub question_id: Option<i64>,
    #[serde(default)]
    pub answer_id: Option<i64>,
    pub body: String,
}

// ============================================================================
// Read records
// ============================================================================

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct UserRecord {
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub username: String,
    pub joined_at: Option<DateTime<Utc>>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
pub struct QuestionRecord {
    pub question_id: i64,
    pub author_id: Option<i64>,
    pub title: String,
    pub status: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}
