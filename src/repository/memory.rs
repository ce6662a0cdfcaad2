use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDateTime;

use crate::domain::category::Category;
use crate::domain::types::CategoryId;
use crate::repository::{
    CategoryReader, CategoryWriter, RepositoryError, RepositoryResult, UnitOfWork,
};

/// Stored row of a category, kept apart from the entity like a database row.
#[derive(Debug, Clone, PartialEq)]
struct CategoryRecord {
    id: CategoryId,
    name: String,
    description: String,
    is_active: bool,
    created_at: NaiveDateTime,
}

impl From<&Category> for CategoryRecord {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id(),
            name: category.name().to_string(),
            description: category.description().to_string(),
            is_active: category.is_active(),
            created_at: category.created_at(),
        }
    }
}

impl TryFrom<&CategoryRecord> for Category {
    type Error = RepositoryError;

    fn try_from(record: &CategoryRecord) -> Result<Self, Self::Error> {
        Ok(Category::restore(
            record.id,
            &record.name,
            &record.description,
            record.is_active,
            record.created_at,
        )?)
    }
}

#[derive(Debug, Clone)]
enum Staged {
    Create(CategoryRecord),
    Update(CategoryRecord),
}

impl Staged {
    fn into_record(self) -> CategoryRecord {
        match self {
            Staged::Create(record) | Staged::Update(record) => record,
        }
    }
}

#[derive(Debug, Default)]
struct Store {
    committed: HashMap<CategoryId, CategoryRecord>,
    pending: Vec<Staged>,
}

impl Store {
    fn is_known(&self, id: CategoryId) -> bool {
        self.committed.contains_key(&id)
            || self.pending.iter().any(|staged| match staged {
                Staged::Create(record) => record.id == id,
                Staged::Update(_) => false,
            })
    }
}

/// Category store kept in process memory.
///
/// Writes are staged and only become visible to readers once
/// [`UnitOfWork::commit`] runs, mirroring a transactional database.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    store: Mutex<Store>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of writes waiting for a commit.
    pub fn pending_writes(&self) -> RepositoryResult<usize> {
        Ok(self.lock()?.pending.len())
    }

    fn lock(&self) -> RepositoryResult<MutexGuard<'_, Store>> {
        self.store
            .lock()
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))
    }
}

impl CategoryReader for InMemoryRepository {
    fn get_category_by_id(&self, id: CategoryId) -> RepositoryResult<Option<Category>> {
        self.lock()?
            .committed
            .get(&id)
            .map(Category::try_from)
            .transpose()
    }

    fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        let mut items = self
            .lock()?
            .committed
            .values()
            .map(Category::try_from)
            .collect::<RepositoryResult<Vec<Category>>>()?;
        items.sort_by(|a, b| a.name().cmp(b.name()).then(a.created_at().cmp(&b.created_at())));
        Ok(items)
    }
}

impl CategoryWriter for InMemoryRepository {
    fn create_category(&self, category: &Category) -> RepositoryResult<CategoryId> {
        let mut store = self.lock()?;
        if store.is_known(category.id()) {
            return Err(RepositoryError::Conflict(category.id()));
        }
        store.pending.push(Staged::Create(category.into()));
        Ok(category.id())
    }

    fn update_category(&self, category: &Category) -> RepositoryResult<()> {
        let mut store = self.lock()?;
        if !store.is_known(category.id()) {
            return Err(RepositoryError::NotFound(category.id()));
        }
        store.pending.push(Staged::Update(category.into()));
        Ok(())
    }
}

impl UnitOfWork for InMemoryRepository {
    fn commit(&self) -> RepositoryResult<()> {
        let mut store = self.lock()?;
        let pending = std::mem::take(&mut store.pending);
        log::debug!("Committing {} staged category writes", pending.len());
        for staged in pending {
            let record = staged.into_record();
            store.committed.insert(record.id, record);
        }
        Ok(())
    }
}
