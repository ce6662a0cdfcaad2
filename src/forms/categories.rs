use serde::Deserialize;

use crate::domain::category::Category;
use crate::domain::types::CategoryId;
use crate::domain::validation::ValidationError;

/// Input of the create-category use case. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CreateCategoryForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl CreateCategoryForm {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            is_active: None,
        }
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    /// Validates the payload into a brand new [`Category`]; active unless told otherwise.
    pub fn into_category(self) -> Result<Category, ValidationError> {
        Category::from_parts(
            self.name.as_deref(),
            self.description.as_deref(),
            self.is_active.unwrap_or(true),
        )
    }
}

/// Input of the update-category use case.
///
/// A missing description keeps the stored one.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateCategoryForm {
    pub category_id: CategoryId,
    pub name: String,
    pub description: Option<String>,
}
