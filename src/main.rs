//! Q&A Forum Gateway
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────────┐    ┌────────────┐
//! │  Client  │───▶│ Gateway  │───▶│ PgForumStore │───▶│ PostgreSQL │
//! │  (JSON)  │    │  (axum)  │    │  (1 txn/req) │    │(procedures)│
//! └──────────┘    └──────────┘    └──────────────┘    └────────────┘
//! ```

use std::sync::Arc;

use anyhow::Context;

use qaforum_gateway::config::AppConfig;
use qaforum_gateway::db::Database;
use qaforum_gateway::forum::PgForumStore;
use qaforum_gateway::logging::init_logging;

// ============================================================
// COMMAND LINE
// ============================================================

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

// ============================================================
// DATABASE
// ============================================================

/// Connect eagerly so misconfiguration shows up at startup, but keep serving
/// `/health` with a lazy pool when the database is not reachable yet.
async fn open_database(app_config: &AppConfig) -> anyhow::Result<Database> {
    match Database::connect(&app_config.postgres).await {
        Ok(db) => Ok(db),
        Err(e) => {
            tracing::warn!(error = %e, "PostgreSQL unreachable at startup, connecting on first request");
            Database::connect_lazy(&app_config.postgres).context("invalid PostgreSQL URL")
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env).context("failed to load configuration")?;
    if let Some(port) = get_port_override() {
        app_config.gateway.port = port;
    }

    let _log_guard = init_logging(&app_config);

    tracing::info!(
        env = %env,
        git_hash = env!("GIT_HASH"),
        "Starting Q&A forum gateway"
    );

    let db = open_database(&app_config).await?;
    let store = Arc::new(PgForumStore::new(db.pool().clone()));

    let addr = app_config.bind_addr();
    qaforum_gateway::run_server(&addr, store)
        .await
        .with_context(|| format!("gateway on {} stopped", addr))?;

    Ok(())
}
