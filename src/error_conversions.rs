//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service error types, so the
//! conversions live here.

use crate::domain::validation::ValidationError;
use crate::repository::RepositoryError;
use crate::services::ServiceError;

impl From<ValidationError> for ServiceError {
    fn from(val: ValidationError) -> Self {
        ServiceError::Validation(val.to_string())
    }
}

impl From<ValidationError> for RepositoryError {
    fn from(val: ValidationError) -> Self {
        RepositoryError::InvalidRecord(val.to_string())
    }
}
