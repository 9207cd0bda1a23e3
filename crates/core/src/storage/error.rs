use thiserror::Error;
use uuid::Uuid;

use crate::customer::ValidationError;

/// Errors that can occur during repository operations.
///
/// Every backend reports failures through this type only, so callers never
/// branch on the concrete storage in use.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Invalid e-mail format: {0}")]
    InvalidEmail(String),
    #[error("Invalid phone number format: {0}")]
    InvalidPhone(String),
    #[error("Customer {field} already exists: {value}")]
    Conflict { field: &'static str, value: String },
    #[error("Customer not found: {0}")]
    NotFound(Uuid),
    #[error("Backend failure: {0}")]
    Backend(String),
}

impl RepositoryError {
    /// Conflict on an existing customer ID.
    pub fn id_conflict(id: Uuid) -> Self {
        Self::Conflict {
            field: "id",
            value: id.to_string(),
        }
    }

    /// Conflict on an email already held by another customer.
    pub fn email_conflict(email: impl Into<String>) -> Self {
        Self::Conflict {
            field: "email",
            value: email.into(),
        }
    }
}

impl From<ValidationError> for RepositoryError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidEmail(email) => Self::InvalidEmail(email),
            ValidationError::InvalidPhone(phone) => Self::InvalidPhone(phone),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let id = Uuid::parse_str("00000000-0000-0000-0000-000000000001").unwrap();
        let error = RepositoryError::NotFound(id);
        assert_eq!(
            error.to_string(),
            "Customer not found: 00000000-0000-0000-0000-000000000001"
        );
    }

    #[test]
    fn test_repository_error_conflict_display() {
        let error = RepositoryError::email_conflict("jorge@corp.com");
        assert_eq!(
            error.to_string(),
            "Customer email already exists: jorge@corp.com"
        );

        let id = Uuid::parse_str("00000000-0000-0000-0000-000000000002").unwrap();
        let error = RepositoryError::id_conflict(id);
        assert_eq!(
            error.to_string(),
            "Customer id already exists: 00000000-0000-0000-0000-000000000002"
        );
    }

    #[test]
    fn test_repository_error_backend_display() {
        let error = RepositoryError::Backend("connection refused".to_string());
        assert_eq!(error.to_string(), "Backend failure: connection refused");
    }

    #[test]
    fn test_validation_errors_keep_their_kind() {
        let error: RepositoryError = ValidationError::InvalidEmail("nope".to_string()).into();
        assert_eq!(error, RepositoryError::InvalidEmail("nope".to_string()));

        let error: RepositoryError = ValidationError::InvalidPhone("abc".to_string()).into();
        assert_eq!(error, RepositoryError::InvalidPhone("abc".to_string()));
    }
}
