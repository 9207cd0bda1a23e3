use thiserror::Error;

/// Errors produced by the customer validators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid e-mail format: {0}")]
    InvalidEmail(String),
    #[error("Invalid phone number format: {0}")]
    InvalidPhone(String),
}
