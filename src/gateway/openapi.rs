//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8000/docs`
//! - OpenAPI JSON: `http://localhost:8000/openapi.json`

use utoipa::OpenApi;

use crate::forum::{
    CommentRequest, PostAnswerRequest, PostQuestionRequest, QuestionRecord, RegisterRequest,
    UserRecord, VoteRequest,
};
use crate::gateway::types::{ErrorResponse, HealthResponse, SuccessResponse};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Q&A Backend API",
        version = "1.0.0",
        description = "Question-and-answer forum gateway. Writes are forwarded to PostgreSQL stored procedures.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health::health_check,
        crate::gateway::handlers::users::list_users,
        crate::gateway::handlers::users::register_user,
        crate::gateway::handlers::questions::create_question,
        crate::gateway::handlers::questions::list_questions,
        crate::gateway::handlers::answers::create_answer,
        crate::gateway::handlers::votes::cast_vote,
        crate::gateway::handlers::comments::create_comment,
    ),
    components(
        schemas(
            HealthResponse,
            SuccessResponse,
            ErrorResponse,
            RegisterRequest,
            PostQuestionRequest,
            PostAnswerRequest,
            VoteRequest,
            CommentRequest,
            UserRecord,
            QuestionRecord,
        )
    ),
    tags(
        (name = "Users", description = "Account registration and listing"),
        (name = "Questions", description = "Question posting and listing"),
        (name = "Answers", description = "Answers to questions"),
        (name = "Votes", description = "Votes on questions or answers"),
        (name = "Comments", description = "Comments on questions or answers"),
        (name = "System", description = "Health checks")
    )
)]
pub struct ApiDoc;
