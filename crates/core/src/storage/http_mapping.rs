//! Pure functions for mapping repository errors to HTTP status codes.
//!
//! This module provides HTTP status code mappings for [`RepositoryError`] variants,
//! following the Functional Core pattern - pure functions with no side effects.

use super::RepositoryError;

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `InvalidEmail` -> 422 (Unprocessable Entity)
/// - `InvalidPhone` -> 422 (Unprocessable Entity)
/// - `Conflict` -> 409 (Conflict)
/// - `NotFound` -> 404 (Not Found)
/// - `Backend` -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use crm_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::NotFound(uuid::Uuid::nil());
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::InvalidEmail(_) => 422,
        RepositoryError::InvalidPhone(_) => 422,
        RepositoryError::Conflict { .. } => 409,
        RepositoryError::NotFound(_) => 404,
        RepositoryError::Backend(_) => 500,
    }
}
