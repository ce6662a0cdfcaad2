//! Strongly-typed value objects used by domain entities.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::validation::ValidationError;

/// Unique identifier for a category. Never the nil UUID.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Generates a fresh random (version 4) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing identifier, rejecting the nil UUID.
    pub fn new(value: Uuid) -> Result<Self, ValidationError> {
        if value.is_nil() {
            return Err(ValidationError::new("Id should not be null"));
        }
        Ok(Self(value))
    }

    /// Returns the raw UUID backing this identifier.
    pub const fn get(self) -> Uuid {
        self.0
    }
}

impl Display for CategoryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Uuid> for CategoryId {
    type Error = ValidationError;

    fn try_from(value: Uuid) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for CategoryId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Uuid::parse_str(s.trim())
            .map_err(|e| ValidationError::new(format!("Id is not a valid identifier: {e}")))?;
        Self::new(value)
    }
}

impl From<CategoryId> for Uuid {
    fn from(value: CategoryId) -> Self {
        value.0
    }
}
