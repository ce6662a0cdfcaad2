use thiserror::Error;

use crate::domain::types::CategoryId;

/// Failures reported by repository and unit-of-work implementations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// No category with the given id exists.
    #[error("category {0} not found")]
    NotFound(CategoryId),
    /// A category with the given id was already written.
    #[error("category {0} already exists")]
    Conflict(CategoryId),
    /// A stored record no longer satisfies the domain invariants.
    #[error("invalid stored category: {0}")]
    InvalidRecord(String),
    /// The backing store cannot be used.
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Convenient alias for results returned from repository functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
