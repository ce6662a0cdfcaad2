//! Persistence capabilities consumed by the use cases.
//!
//! Services only see these traits, so any store (database, in-memory, test
//! fake) can sit behind them. Writes are not durable until
//! [`UnitOfWork::commit`] succeeds.

use crate::domain::category::Category;
use crate::domain::types::CategoryId;

pub mod errors;
pub mod memory;

pub use errors::{RepositoryError, RepositoryResult};
pub use memory::InMemoryRepository;

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// Retrieve a committed category by its identifier.
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>>;
    /// List all committed categories ordered by name.
    fn list_categories(&self) -> RepositoryResult<Vec<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Stage a new, already validated category.
    fn create_category(&self, category: &Category) -> RepositoryResult<CategoryId>;
    /// Stage the new state of an existing category.
    fn update_category(&self, category: &Category) -> RepositoryResult<()>;
}

/// Transaction boundary over the staged repository writes.
pub trait UnitOfWork {
    /// Make every staged write durable and visible.
    fn commit(&self) -> RepositoryResult<()>;
}
