use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::category::Category;

/// Flattened view of a [`Category`] returned by the use cases.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
}

impl From<&Category> for CategoryDto {
    fn from(value: &Category) -> Self {
        Self {
            id: value.id().get(),
            name: value.name().to_string(),
            description: value.description().to_string(),
            is_active: value.is_active(),
            created_at: value.created_at(),
        }
    }
}

impl From<Category> for CategoryDto {
    fn from(value: Category) -> Self {
        Self::from(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn borrowed_conversion_matches_owned() {
        let category = Category::new_with_status("Movies", "Film catalog", false).unwrap();

        let dto = CategoryDto::from(&category);

        assert_eq!(dto.id, category.id().get());
        assert_eq!(dto.name, "Movies");
        assert_eq!(dto.description, "Film catalog");
        assert!(!dto.is_active);
        assert_eq!(dto.created_at, category.created_at());
        assert_eq!(dto, CategoryDto::from(category));
    }
}
