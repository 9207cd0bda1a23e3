use async_trait::async_trait;
use uuid::Uuid;

use crate::customer::Customer;

use super::Result;

/// Storage contract for customer records.
///
/// Implementations must enforce the same rules: IDs and emails are unique
/// among live records, failed writes leave the store unchanged, and reads
/// return independent copies.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Stores a new customer.
    ///
    /// Fails with `InvalidEmail`/`InvalidPhone` when validation fails and with
    /// `Conflict` when the ID or email is already taken.
    async fn create_customer(&self, customer: &Customer) -> Result<()>;

    /// Gets a customer by its ID, failing with `NotFound` when absent.
    async fn get_customer(&self, id: Uuid) -> Result<Customer>;

    /// Gets every live customer. Ordering is backend-defined.
    async fn get_customers(&self) -> Result<Vec<Customer>>;

    /// Replaces every mutable field of the customer with the same ID.
    ///
    /// The ID is the only key; it is never changed by an update.
    async fn update_customer(&self, customer: &Customer) -> Result<()>;

    /// Deletes a customer by its ID, failing with `NotFound` when absent.
    async fn delete_customer(&self, id: Uuid) -> Result<()>;

    /// Releases held resources. Idempotent.
    async fn close(&self) -> Result<()>;
}
