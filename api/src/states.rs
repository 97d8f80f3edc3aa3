use crate::store::PostStore;
use std::sync::Arc;

/// Shared across all requests. The store is behind `Arc<dyn _>` so the
/// binary and each test can hand in their own collection.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }
}
