use thiserror::Error;

use crate::domain::types::CategoryId;

/// Failure of a category use case, as reported to its caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// The input violated a domain constraint; carries the constraint message.
    #[error("{0}")]
    Validation(String),
    #[error("category {0} not found")]
    NotFound(CategoryId),
    /// A collaborator failed; details are logged, not returned.
    #[error("internal error")]
    Internal,
}

pub type ServiceResult<T> = Result<T, ServiceError>;
