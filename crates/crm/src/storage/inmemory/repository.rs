//! In-memory repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crm_core::customer::{validate_customer, Customer};
use crm_core::storage::{CustomerRepository, RepositoryError, Result};

/// In-memory storage backend.
///
/// One instance per server process; clones share the same collection.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    customers: Arc<RwLock<Vec<Customer>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryRepository {
    async fn create_customer(&self, customer: &Customer) -> Result<()> {
        validate_customer(customer)?;

        let mut customers = self.customers.write().await;
        for existing in customers.iter() {
            if existing.id == customer.id {
                return Err(RepositoryError::id_conflict(customer.id));
            }
            if existing.email == customer.email {
                return Err(RepositoryError::email_conflict(&customer.email));
            }
        }
        customers.push(customer.clone());
        Ok(())
    }

    async fn get_customer(&self, id: Uuid) -> Result<Customer> {
        let customers = self.customers.read().await;
        customers
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn get_customers(&self) -> Result<Vec<Customer>> {
        let customers = self.customers.read().await;
        Ok(customers.clone())
    }

    async fn update_customer(&self, customer: &Customer) -> Result<()> {
        validate_customer(customer)?;

        let mut customers = self.customers.write().await;
        let index = customers
            .iter()
            .position(|c| c.id == customer.id)
            .ok_or(RepositoryError::NotFound(customer.id))?;

        if customers
            .iter()
            .any(|c| c.id != customer.id && c.email == customer.email)
        {
            return Err(RepositoryError::email_conflict(&customer.email));
        }

        let stored = &mut customers[index];
        stored.name = customer.name.clone();
        stored.role = customer.role;
        stored.email = customer.email.clone();
        stored.phone_number = customer.phone_number.clone();
        stored.contacted = customer.contacted;
        Ok(())
    }

    async fn delete_customer(&self, id: Uuid) -> Result<()> {
        let mut customers = self.customers.write().await;
        let index = customers
            .iter()
            .position(|c| c.id == id)
            .ok_or(RepositoryError::NotFound(id))?;
        customers.remove(index);
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        Ok(())
    }
}
