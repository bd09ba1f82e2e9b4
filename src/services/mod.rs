use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod categories;
pub mod products;
pub mod tags;

/// Result type returned by the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Errors surfaced to the HTTP layer.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request payload failed validation.
    #[error("invalid input: {0}")]
    Form(String),
    /// The targeted record does not exist or no row was affected.
    #[error("resource not found")]
    NotFound,
    /// The write referenced a missing record or broke a uniqueness rule.
    #[error("conflict: {0}")]
    Conflict(String),
    /// Storage failure that the client cannot act upon.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ForeignKeyViolation(message)
            | RepositoryError::ConstraintViolation(message) => ServiceError::Conflict(message),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}

/// Treat a write that touched no rows as a missing record.
fn require_affected(affected: usize) -> ServiceResult<usize> {
    if affected == 0 {
        Err(ServiceError::NotFound)
    } else {
        Ok(affected)
    }
}
