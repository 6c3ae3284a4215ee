//! Shared registry of plant types.
//!
//! Types are global rather than per garden and are looked up by exact name.
//! The registry only grows through get-or-create, so two users entering the
//! same name end up pointing at the same row.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::PlantTypeId;

/// Maximum plant type name length in characters.
pub const PLANT_TYPE_NAME_MAX: usize = 100;

/// Validation errors for [`PlantTypeName::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlantTypeValidationError {
    /// Name was blank once trimmed.
    #[error("Please enter a plant type.")]
    Empty,
    /// Name exceeded [`PLANT_TYPE_NAME_MAX`].
    #[error("Ensure this value has at most {max} characters.")]
    TooLong { max: usize },
}

/// Trimmed, non-empty plant type name.
///
/// # Examples
/// ```
/// use garden_journal::domain::PlantTypeName;
///
/// let name = PlantTypeName::new("  Tomato ").expect("valid name");
/// assert_eq!(name.as_ref(), "Tomato");
/// assert!(PlantTypeName::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlantTypeName(String);

impl PlantTypeName {
    /// Validate and construct a plant type name.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, PlantTypeValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PlantTypeValidationError::Empty);
        }
        if trimmed.chars().count() > PLANT_TYPE_NAME_MAX {
            return Err(PlantTypeValidationError::TooLong {
                max: PLANT_TYPE_NAME_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for PlantTypeName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PlantTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PlantTypeName> for String {
    fn from(value: PlantTypeName) -> Self {
        value.0
    }
}

impl TryFrom<String> for PlantTypeName {
    type Error = PlantTypeValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Registry entry shared across every garden.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantType {
    pub id: PlantTypeId,
    #[schema(value_type = String, example = "Tomato")]
    pub name: PlantTypeName,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", PlantTypeValidationError::Empty)]
    #[case(" \t ", PlantTypeValidationError::Empty)]
    fn blank_names_are_rejected(#[case] raw: &str, #[case] expected: PlantTypeValidationError) {
        assert_eq!(PlantTypeName::new(raw).expect_err("blank"), expected);
    }

    #[rstest]
    fn overlong_names_are_rejected() {
        let raw = "x".repeat(PLANT_TYPE_NAME_MAX + 1);
        assert!(matches!(
            PlantTypeName::new(raw),
            Err(PlantTypeValidationError::TooLong { .. })
        ));
    }

    #[rstest]
    fn names_compare_exactly() {
        let lower = PlantTypeName::new("basil").expect("valid");
        let upper = PlantTypeName::new("Basil").expect("valid");
        assert_ne!(lower, upper);
    }
}
