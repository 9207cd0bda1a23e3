//! PostgreSQL error mapping.
//!
//! Maps `sqlx::Error` to `RepositoryError` from `crm_core::storage`.
//! Unique violations become `Conflict`; everything else is a `Backend` failure.

use crm_core::customer::Customer;
use crm_core::storage::RepositoryError;

/// Maps a driver error to a RepositoryError.
///
/// Use for statements that cannot violate a uniqueness constraint.
pub fn map_sqlx_error(err: sqlx::Error) -> RepositoryError {
    RepositoryError::Backend(err.to_string())
}

/// Maps a driver error raised while writing `customer` to a RepositoryError.
///
/// # Error Mapping
///
/// - unique violation on a constraint naming `email` → `Conflict` on the email
/// - any other unique violation → `Conflict` on the ID
/// - all other errors → `Backend`
pub fn map_sqlx_error_for(err: sqlx::Error, customer: &Customer) -> RepositoryError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
            if db_err
                .constraint()
                .is_some_and(|constraint| constraint.contains("email"))
            {
                RepositoryError::email_conflict(&customer.email)
            } else {
                RepositoryError::id_conflict(customer.id)
            }
        }
        _ => map_sqlx_error(err),
    }
}
