mod address;
mod error;
mod operations;
mod requests;
mod types;

pub use address::parse_address;
pub use error::ValidationError;
pub use operations::{validate_customer, validate_email, validate_phone};
pub use requests::{CreateCustomerRequest, CustomerCreatedResponse};
pub use types::{Customer, CustomerRole};
