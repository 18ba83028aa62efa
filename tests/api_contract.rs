//! Wire contract of the public router, driven through the crate's exported API.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use qaforum_gateway::forum::{
    CommentCommand, ForumStore, PostAnswerRequest, PostQuestionRequest, PostTarget,
    QuestionRecord, RegisterRequest, StoreError, UserRecord, VoteCommand,
};
use qaforum_gateway::router;

/// Answers every write with `true` and remembers what it was asked to do.
#[derive(Default)]
struct StubStore {
    seen: Mutex<Vec<String>>,
}

impl StubStore {
    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }

    fn record(&self, entry: String) -> Result<bool, StoreError> {
        self.seen.lock().unwrap().push(entry);
        Ok(true)
    }
}

#[async_trait]
impl ForumStore for StubStore {
    async fn list_users(&self, _limit: i64) -> Result<Vec<UserRecord>, StoreError> {
        Ok(Vec::new())
    }

    async fn register(&self, req: &RegisterRequest) -> Result<bool, StoreError> {
        self.record(format!("register {} status={}", req.username, req.status))
    }

    async fn post_question(&self, req: &PostQuestionRequest) -> Result<bool, StoreError> {
        self.record(format!("post_question {} status={}", req.title, req.status))
    }

    async fn list_questions(&self, _limit: i64) -> Result<Vec<QuestionRecord>, StoreError> {
        Err(StoreError::Query(sqlx::Error::PoolTimedOut))
    }

    async fn post_answer(&self, req: &PostAnswerRequest) -> Result<bool, StoreError> {
        self.record(format!("post_answer q={}", req.question_id))
    }

    async fn make_vote(&self, cmd: &VoteCommand) -> Result<bool, StoreError> {
        self.record(format!("make_vote {:?} {}", cmd.target, cmd.vote))
    }

    async fn make_comment(&self, cmd: &CommentCommand) -> Result<bool, StoreError> {
        let target = match cmd.target {
            PostTarget::Question(id) => format!("question {id}"),
            PostTarget::Answer(id) => format!("answer {id}"),
        };
        self.record(format!("make_comment {target}"))
    }
}

async fn call(store: Arc<StubStore>, request: Request<Body>) -> (StatusCode, Value) {
    let response = router(store).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn post(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn defaults_are_applied_before_the_procedure_call() {
    let store = Arc::new(StubStore::default());

    let (status, _) = call(
        store.clone(),
        post(
            "/users/register",
            json!({
                "first_name": "Grace",
                "last_name": "Hopper",
                "email": "grace@example.com",
                "username": "grace",
                "password": "cobol"
            }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call(
        store.clone(),
        post("/questions", json!({"author_id": 1, "title": "Why?", "body": "..."})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(
        store.seen(),
        vec![
            "register grace status=active".to_string(),
            "post_question Why? status=open".to_string(),
        ]
    );
}

#[tokio::test]
async fn comment_targets_reach_the_store() {
    let store = Arc::new(StubStore::default());

    for body in [
        json!({"author_id": 1, "question_id": 9, "body": "q"}),
        json!({"author_id": 1, "answer_id": 4, "body": "a"}),
    ] {
        let (status, reply) = call(store.clone(), post("/comments", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(reply, json!({"success": true}));
    }

    assert_eq!(
        store.seen(),
        vec![
            "make_comment question 9".to_string(),
            "make_comment answer 4".to_string(),
        ]
    );
}

#[tokio::test]
async fn vote_without_target_never_reaches_the_store() {
    let store = Arc::new(StubStore::default());

    let (status, reply) = call(store.clone(), post("/votes", json!({"voter_id": 1, "vote": 1}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(reply["detail"], "Provide exactly one of question_id or answer_id");
    assert!(store.seen().is_empty());
}

#[tokio::test]
async fn listing_failure_is_internal_error() {
    let store = Arc::new(StubStore::default());
    let request = Request::builder()
        .uri("/questions")
        .body(Body::empty())
        .unwrap();

    let (status, reply) = call(store, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(reply["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn wrong_content_type_is_rejected() {
    let store = Arc::new(StubStore::default());
    let request = Request::builder()
        .method("POST")
        .uri("/answers")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("question_id=1"))
        .unwrap();

    let (status, reply) = call(store.clone(), request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(reply["code"], "MALFORMED_BODY");
    assert!(store.seen().is_empty());
}

#[tokio::test]
async fn get_on_write_route_is_not_allowed() {
    let store = Arc::new(StubStore::default());
    let request = Request::builder()
        .uri("/answers")
        .body(Body::empty())
        .unwrap();

    let (status, _) = call(store, request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}
