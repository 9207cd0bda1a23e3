//! PostgreSQL repository implementation.
//!
//! Implements `CustomerRepository` from `crm_core::storage` on top of a
//! `sqlx` connection pool.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use uuid::Uuid;

use crm_core::customer::{validate_customer, Customer};
use crm_core::storage::{CustomerRepository, RepositoryError, Result};

use super::conversions::row_to_customer;
use super::error::{map_sqlx_error, map_sqlx_error_for};
use super::schema;
use crate::config::DatabaseConfig;

/// PostgreSQL-based repository implementation.
#[derive(Debug, Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a repository whose pool connects on first use.
    ///
    /// Never fails: an unreachable server surfaces as `Backend` errors from
    /// the individual operations.
    pub fn new(config: &DatabaseConfig) -> Self {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_lazy_with(config.connect_options());

        tracing::debug!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            "Configured PostgreSQL pool"
        );

        Self::from_pool(pool)
    }

    /// Wraps an existing pool.
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for PostgresRepository {
    async fn create_customer(&self, customer: &Customer) -> Result<()> {
        validate_customer(customer)?;

        sqlx::query(schema::INSERT_CUSTOMER)
            .bind(customer.id)
            .bind(&customer.name)
            .bind(customer.role.ordinal())
            .bind(&customer.email)
            .bind(&customer.phone_number)
            .bind(customer.contacted)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error_for(e, customer))?;

        Ok(())
    }

    async fn get_customer(&self, id: Uuid) -> Result<Customer> {
        let row = sqlx::query(schema::SELECT_CUSTOMER_BY_ID)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(RepositoryError::NotFound(id))?;

        row_to_customer(&row).map_err(map_sqlx_error)
    }

    async fn get_customers(&self) -> Result<Vec<Customer>> {
        let rows = sqlx::query(schema::SELECT_ALL_CUSTOMERS)
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        rows.iter()
            .map(row_to_customer)
            .collect::<sqlx::Result<Vec<_>>>()
            .map_err(map_sqlx_error)
    }

    async fn update_customer(&self, customer: &Customer) -> Result<()> {
        validate_customer(customer)?;

        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let result = sqlx::query(schema::UPDATE_CUSTOMER)
            .bind(customer.id)
            .bind(&customer.name)
            .bind(customer.role.ordinal())
            .bind(&customer.email)
            .bind(&customer.phone_number)
            .bind(customer.contacted)
            .execute(&mut *tx)
            .await;

        match result {
            Err(err) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(error = %rollback_err, id = %customer.id, "Rollback failed");
                }
                Err(map_sqlx_error_for(err, customer))
            }
            Ok(done) if done.rows_affected() == 0 => {
                tx.rollback().await.map_err(map_sqlx_error)?;
                Err(RepositoryError::NotFound(customer.id))
            }
            // A failed commit drops `tx`, which queues the rollback.
            Ok(_) => tx.commit().await.map_err(map_sqlx_error),
        }
    }

    async fn delete_customer(&self, id: Uuid) -> Result<()> {
        let done = sqlx::query(schema::DELETE_CUSTOMER)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if done.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.pool.close().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::storage::contract;
    use crm_core::customer::CustomerRole;

    fn unreachable_repository() -> PostgresRepository {
        let config = DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            ..DatabaseConfig::default()
        };
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .acquire_timeout(Duration::from_millis(500))
            .connect_lazy_with(config.connect_options());
        PostgresRepository::from_pool(pool)
    }

    #[tokio::test]
    async fn test_new_does_not_connect() {
        let config = DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            ..DatabaseConfig::default()
        };

        let repo = PostgresRepository::new(&config);

        repo.close().await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_server_is_backend_error() {
        let repo = unreachable_repository();

        let result = repo.get_customers().await;

        assert!(matches!(result, Err(RepositoryError::Backend(_))));
    }

    #[tokio::test]
    async fn test_validation_runs_before_touching_the_database() {
        let repo = unreachable_repository();
        let customer = Customer::new("Jorge", CustomerRole::PARTNER, "not-an-email", "514 888 8888");

        assert_eq!(
            repo.create_customer(&customer).await,
            Err(RepositoryError::InvalidEmail("not-an-email".to_string()))
        );
        assert_eq!(
            repo.update_customer(&customer).await,
            Err(RepositoryError::InvalidEmail("not-an-email".to_string()))
        );
    }

    #[tokio::test]
    async fn test_operations_after_close_are_backend_errors() {
        let repo = unreachable_repository();

        repo.close().await.unwrap();
        repo.close().await.unwrap();

        let result = repo.get_customer(Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepositoryError::Backend(_))));
    }

    // ==================== Live database ====================
    //
    // Run with `DB_*` pointing at a disposable PostgreSQL database:
    // cargo test -p crm -- --ignored

    async fn live_repository() -> PostgresRepository {
        let repo = PostgresRepository::new(&DatabaseConfig::from_env());
        sqlx::query(schema::CREATE_CUSTOMERS_TABLE)
            .execute(&repo.pool)
            .await
            .expect("Failed to create customers table");
        repo
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL server"]
    async fn test_live_create_then_get_returns_equal_record() {
        contract::create_then_get_returns_equal_record(&live_repository().await).await;
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL server"]
    async fn test_live_duplicate_id_conflicts() {
        contract::duplicate_id_conflicts(&live_repository().await).await;
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL server"]
    async fn test_live_duplicate_email_conflicts() {
        contract::duplicate_email_conflicts(&live_repository().await).await;
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL server"]
    async fn test_live_invalid_fields_are_rejected() {
        contract::invalid_fields_are_rejected(&live_repository().await).await;
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL server"]
    async fn test_live_update_round_trip() {
        contract::update_round_trip(&live_repository().await).await;
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL server"]
    async fn test_live_update_unknown_id_is_not_found() {
        contract::update_unknown_id_is_not_found(&live_repository().await).await;
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL server"]
    async fn test_live_update_to_taken_email_conflicts() {
        contract::update_to_taken_email_conflicts(&live_repository().await).await;
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL server"]
    async fn test_live_delete_removes_record() {
        contract::delete_removes_record(&live_repository().await).await;
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL server"]
    async fn test_live_unknown_id_is_not_found() {
        contract::unknown_id_is_not_found(&live_repository().await).await;
    }
}
