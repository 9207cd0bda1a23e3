//! API request and response types for customer operations.
//!
//! Following the Functional Core pattern, these are pure data types with no I/O.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::{Customer, CustomerRole};

/// Request payload for creating a new customer.
///
/// Carries no ID: the server assigns one when the request is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub role: CustomerRole,
    pub email: String,
    pub phone_number: String,
    #[serde(default)]
    pub contacted: bool,
}

impl CreateCustomerRequest {
    /// Convert into a Customer with a freshly generated ID.
    pub fn into_customer(self) -> Customer {
        Customer::new(self.name, self.role, self.email, self.phone_number)
            .with_contacted(self.contacted)
    }
}

/// Response body returned after a successful creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreatedResponse {
    pub id: Uuid,
}
