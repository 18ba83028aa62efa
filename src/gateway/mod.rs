pub mod error;
pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;


use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::forum::ForumStore;
pub use error::GatewayError;
pub use state::AppState;

/// Build the complete router around a store.
pub fn router(store: Arc<dyn ForumStore>) -> Router {
    let state = Arc::new(AppState::new(store));

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/users", get(handlers::list_users))
        .route("/users/register", post(handlers::register_user))
        .route(
            "/questions",
            get(handlers::list_questions).post(handlers::create_question),
        )
        .route("/answers", post(handlers::create_answer))
        .route("/votes", post(handlers::cast_vote))
        .route("/comments", post(handlers::create_comment))
        .with_state(state)
        // stateless, added after with_state
        .merge(SwaggerUi::new("/docs").url("/openapi.json", openapi::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
}

/// Start HTTP Gateway server
pub async fn run_server(addr: &str, store: Arc<dyn ForumStore>) -> std::io::Result<()> {
    let app = router(store);

    let listener = TcpListener::bind(addr).await.inspect_err(|e| {
        tracing::error!("Failed to bind to {}: {}", addr, e);
    })?;

    tracing::info!("Gateway listening on http://{}", addr);
    tracing::info!("API Docs: http://{}/docs", addr);

    axum::serve(listener, app).await
}
