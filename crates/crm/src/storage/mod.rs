//! Storage backend implementations.
//!
//! This module provides concrete implementations of the `CustomerRepository`
//! trait defined in `crm_core::storage`. The backend is chosen at startup from
//! a configuration token.
//!
//! # Backends
//!
//! - `in-memory` (default): process-local collection, lost on exit
//! - `psql`: PostgreSQL through a `sqlx` connection pool

use std::sync::Arc;

use crm_core::storage::{CustomerRepository, RepositoryProvider};

use crate::config::DatabaseConfig;

pub mod inmemory;
pub mod postgres;

#[cfg(test)]
pub(crate) mod contract;

pub use inmemory::InMemoryRepository;
pub use postgres::PostgresRepository;

/// Builds the repository named by `token`.
///
/// Unknown tokens fall back to the in-memory backend with a warning. The
/// PostgreSQL pool connects lazily, so this never fails.
pub fn select_repository(token: &str, db: &DatabaseConfig) -> Arc<dyn CustomerRepository> {
    let provider = RepositoryProvider::from_token(token).unwrap_or_else(|| {
        tracing::warn!(
            token,
            fallback = %RepositoryProvider::InMemory,
            "Unknown repository provider, falling back"
        );
        RepositoryProvider::InMemory
    });

    tracing::info!(provider = %provider, "Using customer repository");

    match provider {
        RepositoryProvider::InMemory => Arc::new(InMemoryRepository::new()),
        RepositoryProvider::Postgres => Arc::new(PostgresRepository::new(db)),
    }
}
