use std::sync::Arc;

use crate::forum::ForumStore;

/// Gateway application state (shared)
#[derive(Clone)]
pub struct AppState {
    /// Procedure invoker; each call scopes its own connection
    pub store: Arc<dyn ForumStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ForumStore>) -> Self {
        Self { store }
    }
}
