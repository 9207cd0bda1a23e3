//! In-memory storage backend.
//!
//! Keeps every live customer in insertion order inside a single
//! `Arc<RwLock<Vec<_>>>`. Each operation holds the lock for its full duration,
//! so uniqueness checks and the write that follows them are atomic. Data is not
//! persisted and is lost when the repository is dropped.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
