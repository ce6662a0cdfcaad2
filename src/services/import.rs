use crate::dto::categories::CategoryDto;
use crate::forms::categories::CreateCategoryForm;
use crate::repository::{CategoryWriter, UnitOfWork};

use super::ServiceError;
use super::categories::create_category;

/// Outcome of a bulk import. Rejected entries keep their position in the input.
#[derive(Debug, Default, PartialEq)]
pub struct ImportReport {
    pub created: Vec<CategoryDto>,
    pub rejected: Vec<(usize, ServiceError)>,
}

/// Runs the create use case for every form; a rejected entry does not stop the import.
pub fn import_categories<I, R, U>(forms: I, repo: &R, uow: &U) -> ImportReport
where
    I: IntoIterator<Item = CreateCategoryForm>,
    R: CategoryWriter,
    U: UnitOfWork,
{
    let mut report = ImportReport::default();
    for (index, form) in forms.into_iter().enumerate() {
        match create_category(form, repo, uow) {
            Ok(category) => report.created.push(category),
            Err(e) => {
                log::warn!("Skipping category #{index}: {e}");
                report.rejected.push((index, e));
            }
        }
    }
    report
}
