use chrono::{NaiveDateTime, Utc};

use crate::domain::types::CategoryId;
use crate::domain::validation::{ValidationError, max_length, min_length, not_null_or_empty};

pub const NAME_MIN_LENGTH: usize = 3;
pub const NAME_MAX_LENGTH: usize = 255;
pub const DESCRIPTION_MAX_LENGTH: usize = 10_000;

/// Named, described grouping unit of the catalog.
///
/// Fields are only reachable through accessors; every constructor and
/// mutation validates before writing, so an instance is always valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    id: CategoryId,
    name: String,
    description: String,
    is_active: bool,
    created_at: NaiveDateTime,
}

impl Category {
    /// Creates an active category.
    pub fn new(name: &str, description: &str) -> Result<Self, ValidationError> {
        Self::new_with_status(name, description, true)
    }

    pub fn new_with_status(
        name: &str,
        description: &str,
        is_active: bool,
    ) -> Result<Self, ValidationError> {
        Self::from_parts(Some(name), Some(description), is_active)
    }

    /// Creates a category from possibly absent values, as received from callers.
    pub fn from_parts(
        name: Option<&str>,
        description: Option<&str>,
        is_active: bool,
    ) -> Result<Self, ValidationError> {
        let id = CategoryId::generate();
        let created_at = Utc::now().naive_utc();
        let (name, description) = Self::validate(name, description)?;

        Ok(Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            is_active,
            created_at,
        })
    }

    /// Rebuilds a previously persisted category.
    pub fn restore(
        id: CategoryId,
        name: &str,
        description: &str,
        is_active: bool,
        created_at: NaiveDateTime,
    ) -> Result<Self, ValidationError> {
        if created_at == NaiveDateTime::default() {
            return Err(ValidationError::new("CreatedAt should not be null"));
        }
        Self::validate(Some(name), Some(description))?;

        Ok(Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            is_active,
            created_at,
        })
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    /// Replaces the name and, when given, the description.
    ///
    /// Nothing is written unless both resulting values pass validation.
    pub fn update(&mut self, name: &str, description: Option<&str>) -> Result<(), ValidationError> {
        let description = description.unwrap_or(self.description.as_str());
        let (name, description) = Self::validate(Some(name), Some(description))?;
        let (name, description) = (name.to_string(), description.to_string());

        self.name = name;
        self.description = description;
        Ok(())
    }

    pub fn id(&self) -> CategoryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    fn validate<'a>(
        name: Option<&'a str>,
        description: Option<&'a str>,
    ) -> Result<(&'a str, &'a str), ValidationError> {
        not_null_or_empty(name, "Name")?;
        let name = name.unwrap_or_default();
        min_length(name, NAME_MIN_LENGTH, "Name")?;
        max_length(name, NAME_MAX_LENGTH, "Name")?;

        not_null_or_empty(description, "Description")?;
        let description = description.unwrap_or_default();
        max_length(description, DESCRIPTION_MAX_LENGTH, "Description")?;

        Ok((name, description))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_category() -> Category {
        Category::new("Category name", "Category description").unwrap()
    }

    #[test]
    fn creates_active_category_by_default() {
        let before = Utc::now().naive_utc();
        let category = Category::new("Movies", "Film catalog").unwrap();
        let after = Utc::now().naive_utc();

        assert_eq!(category.name(), "Movies");
        assert_eq!(category.description(), "Film catalog");
        assert!(category.is_active());
        assert!(!category.id().get().is_nil());
        assert_ne!(category.created_at(), NaiveDateTime::default());
        assert!(category.created_at() >= before);
        assert!(category.created_at() <= after);
    }

    #[test]
    fn creates_category_with_explicit_status() {
        for is_active in [true, false] {
            let category = Category::new_with_status("Movies", "Film catalog", is_active).unwrap();
            assert_eq!(category.is_active(), is_active);
        }
    }

    #[test]
    fn each_category_gets_its_own_id() {
        assert_ne!(sample_category().id(), sample_category().id());
    }

    #[test]
    fn rejects_blank_or_missing_name() {
        for name in [None, Some(""), Some("   ")] {
            let err = Category::from_parts(name, Some("Category description"), true).unwrap_err();
            assert_eq!(err.message(), "Name should not be null or empty");
        }
    }

    #[test]
    fn rejects_blank_or_missing_description() {
        for description in [None, Some(""), Some("   ")] {
            let err = Category::from_parts(Some("Category name"), description, true).unwrap_err();
            assert_eq!(err.message(), "Description should not be null or empty");
        }
    }

    #[test]
    fn name_length_boundaries() {
        let cases = [
            (2, Some("Name should be at least 3 characters long")),
            (3, None),
            (4, None),
            (254, None),
            (255, None),
            (256, Some("Name should be less or equal 255 caracters long")),
        ];
        for (length, expected) in cases {
            let name = "a".repeat(length);
            let result = Category::new(&name, "Category description");
            match expected {
                Some(message) => assert_eq!(result.unwrap_err().message(), message),
                None => assert_eq!(result.unwrap().name().len(), length),
            }
        }
    }

    #[test]
    fn short_names_fail_on_length() {
        for name in ["1", "12", "a", "ca"] {
            let err = Category::new(name, "Category description").unwrap_err();
            assert_eq!(err.message(), "Name should be at least 3 characters long");
        }
    }

    #[test]
    fn description_length_boundaries() {
        let cases = [
            (1, true),
            (2, true),
            (9_999, true),
            (10_000, true),
            (10_001, false),
        ];
        for (length, ok) in cases {
            let description = "d".repeat(length);
            let result = Category::new("Category name", &description);
            if ok {
                assert_eq!(result.unwrap().description().len(), length);
            } else {
                assert_eq!(
                    result.unwrap_err().message(),
                    "Description should be less or equal 10000 caracters long"
                );
            }
        }
    }

    #[test]
    fn name_is_checked_before_description() {
        let err = Category::new("ab", "").unwrap_err();
        assert_eq!(err.message(), "Name should be at least 3 characters long");
    }

    #[test]
    fn keeps_values_as_given() {
        let category = Category::new("  Movies  ", " Film catalog ").unwrap();
        assert_eq!(category.name(), "  Movies  ");
        assert_eq!(category.description(), " Film catalog ");
    }

    #[test]
    fn activation_toggles_are_idempotent() {
        let mut category = Category::new_with_status("Movies", "Film catalog", false).unwrap();

        category.activate();
        assert!(category.is_active());
        category.activate();
        assert!(category.is_active());

        category.deactivate();
        assert!(!category.is_active());
        category.deactivate();
        assert!(!category.is_active());

        category.activate();
        assert!(category.is_active());
    }

    #[test]
    fn update_name_only_keeps_description() {
        let mut category = sample_category();
        let (id, created_at) = (category.id(), category.created_at());

        category.update("New name", None).unwrap();

        assert_eq!(category.name(), "New name");
        assert_eq!(category.description(), "Category description");
        assert_eq!(category.id(), id);
        assert_eq!(category.created_at(), created_at);
        assert!(category.is_active());
    }

    #[test]
    fn update_replaces_both_fields() {
        let mut category = sample_category();
        category.deactivate();

        category.update("New name", Some("New description")).unwrap();

        assert_eq!(category.name(), "New name");
        assert_eq!(category.description(), "New description");
        assert!(!category.is_active());
    }

    #[test]
    fn failed_update_writes_nothing() {
        let mut category = sample_category();
        let original = category.clone();

        let err = category.update("ab", Some("New description")).unwrap_err();
        assert_eq!(err.message(), "Name should be at least 3 characters long");
        assert_eq!(category, original);

        let err = category.update("New name", Some("  ")).unwrap_err();
        assert_eq!(err.message(), "Description should not be null or empty");
        assert_eq!(category, original);
    }

    #[test]
    fn restore_keeps_identity_and_timestamp() {
        let original = sample_category();
        let restored = Category::restore(
            original.id(),
            original.name(),
            original.description(),
            original.is_active(),
            original.created_at(),
        )
        .unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn restore_rejects_invalid_state() {
        let original = sample_category();
        let err = Category::restore(
            original.id(),
            original.name(),
            original.description(),
            true,
            NaiveDateTime::default(),
        )
        .unwrap_err();
        assert_eq!(err.message(), "CreatedAt should not be null");

        let err = Category::restore(original.id(), "x", "d", true, original.created_at())
            .unwrap_err();
        assert_eq!(err.message(), "Name should be at least 3 characters long");
    }
}
