//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers.

use std::sync::Arc;

use crm_core::storage::CustomerRepository;

use crate::storage::InMemoryRepository;

/// Shared application state.
///
/// Cloned for each request handler; every clone points at the same repository.
#[derive(Clone)]
pub struct AppState {
    /// Customer repository selected at startup.
    pub customer_repo: Arc<dyn CustomerRepository>,
}

impl AppState {
    /// Creates state backed by the given repository.
    pub fn new(customer_repo: Arc<dyn CustomerRepository>) -> Self {
        Self { customer_repo }
    }
}

impl Default for AppState {
    /// Empty in-memory repository.
    fn default() -> Self {
        Self::new(Arc::new(InMemoryRepository::new()))
    }
}
