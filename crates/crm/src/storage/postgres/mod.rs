//! PostgreSQL storage backend implementation.
//!
//! Uses a lazily connected `sqlx` pool. The `customers` table must exist;
//! see `schema::CREATE_CUSTOMERS_TABLE` for its layout.

mod conversions;
mod error;
mod repository;
mod schema;

pub use repository::PostgresRepository;
