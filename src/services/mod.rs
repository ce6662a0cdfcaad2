//! Use cases orchestrating the domain model and its persistence capabilities.

pub mod categories;
pub mod errors;
pub mod import;

pub use errors::{ServiceError, ServiceResult};
