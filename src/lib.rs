//! Q&A Forum Gateway
//!
//! HTTP front for a question-and-answer forum whose business rules live in
//! PostgreSQL stored procedures. Writes are forwarded one procedure call per
//! request; reads are capped listings.
//!
//! # Modules
//!
//! - [`config`] - YAML configuration with environment overrides
//! - [`logging`] - tracing subscriber and rolling file output
//! - [`db`] - PostgreSQL connection pool
//! - [`forum`] - Payloads, records and the procedure-backed store
//! - [`gateway`] - axum router, handlers and error mapping

pub mod config;
pub mod db;
pub mod forum;
pub mod gateway;
pub mod logging;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use db::Database;
pub use forum::{ForumStore, PgForumStore, StoreError};
pub use gateway::{GatewayError, router, run_server};
