use crate::domain::category::Category;
use crate::domain::types::CategoryId;
use crate::dto::categories::CategoryDto;
use crate::forms::categories::{CreateCategoryForm, UpdateCategoryForm};
use crate::repository::{CategoryReader, CategoryWriter, UnitOfWork};

use super::{ServiceError, ServiceResult};

/// Creates a category and commits it.
///
/// The payload is validated first; an invalid payload never reaches the
/// repository. On success the repository is called once, then the unit of
/// work is committed once.
pub fn create_category<R, U>(
    form: CreateCategoryForm,
    repo: &R,
    uow: &U,
) -> ServiceResult<CategoryDto>
where
    R: CategoryWriter,
    U: UnitOfWork,
{
    let category = form.into_category()?;

    if let Err(e) = repo.create_category(&category) {
        log::error!("Failed to create category: {e}");
        return Err(ServiceError::Internal);
    }

    if let Err(e) = uow.commit() {
        log::error!("Failed to commit category {}: {e}", category.id());
        return Err(ServiceError::Internal);
    }

    log::info!("Created category {} ({})", category.id(), category.name());
    Ok(CategoryDto::from(category))
}

pub fn get_category<R>(id: CategoryId, repo: &R) -> ServiceResult<CategoryDto>
where
    R: CategoryReader,
{
    load_category(id, repo).map(CategoryDto::from)
}

pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<CategoryDto>>
where
    R: CategoryReader,
{
    match repo.list_categories() {
        Ok(categories) => Ok(categories.into_iter().map(CategoryDto::from).collect()),
        Err(e) => {
            log::error!("Failed to list categories: {e}");
            Err(ServiceError::Internal)
        }
    }
}

pub fn update_category<R, U>(
    form: UpdateCategoryForm,
    repo: &R,
    uow: &U,
) -> ServiceResult<CategoryDto>
where
    R: CategoryReader + CategoryWriter,
    U: UnitOfWork,
{
    let mut category = load_category(form.category_id, repo)?;
    category.update(&form.name, form.description.as_deref())?;
    save(category, repo, uow)
}

pub fn activate_category<R, U>(
    id: CategoryId,
    repo: &R,
    uow: &U,
) -> ServiceResult<CategoryDto>
where
    R: CategoryReader + CategoryWriter,
    U: UnitOfWork,
{
    let mut category = load_category(id, repo)?;
    category.activate();
    save(category, repo, uow)
}

pub fn deactivate_category<R, U>(
    id: CategoryId,
    repo: &R,
    uow: &U,
) -> ServiceResult<CategoryDto>
where
    R: CategoryReader + CategoryWriter,
    U: UnitOfWork,
{
    let mut category = load_category(id, repo)?;
    category.deactivate();
    save(category, repo, uow)
}

fn load_category<R>(id: CategoryId, repo: &R) -> ServiceResult<Category>
where
    R: CategoryReader,
{
    match repo.get_category_by_id(id) {
        Ok(Some(category)) => Ok(category),
        Ok(None) => Err(ServiceError::NotFound(id)),
        Err(e) => {
            log::error!("Failed to get category {id}: {e}");
            Err(ServiceError::Internal)
        }
    }
}

fn save<R, U>(category: Category, repo: &R, uow: &U) -> ServiceResult<CategoryDto>
where
    R: CategoryWriter,
    U: UnitOfWork,
{
    if let Err(e) = repo.update_category(&category) {
        log::error!("Failed to update category {}: {e}", category.id());
        return Err(ServiceError::Internal);
    }

    if let Err(e) = uow.commit() {
        log::error!("Failed to commit category {}: {e}", category.id());
        return Err(ServiceError::Internal);
    }

    Ok(CategoryDto::from(category))
}
