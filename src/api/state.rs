use std::sync::Arc;

use tokio::sync::RwLock;

use crate::services::Filmorate;

/// Shared application state
///
/// Both stores and the relationship graph sit behind one lock: handlers take
/// the write half for any mutation, so readers never see a friendship that
/// exists in only one direction.
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<Filmorate>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates state over empty in-memory stores
    pub fn new() -> Self {
        Self::with_service(Filmorate::in_memory())
    }

    /// Wraps an already configured service
    pub fn with_service(service: Filmorate) -> Self {
        Self {
            inner: Arc::new(RwLock::new(service)),
        }
    }
}
