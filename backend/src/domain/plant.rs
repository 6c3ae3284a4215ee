//! Plants tracked inside a garden.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::optional_text;
use super::{FieldErrors, GardenId, PlantId, PlantType, PlantTypeName};

/// Maximum plant name length in characters.
pub const PLANT_NAME_MAX: usize = 100;

/// Date format accepted by the plant form.
pub const PLANTED_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation errors for plant fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlantValidationError {
    #[error("This field is required.")]
    EmptyName,
    #[error("Ensure this value has at most {max} characters.")]
    NameTooLong { max: usize },
    #[error("Enter a valid date.")]
    InvalidDate,
    #[error("Planted date cannot be in the future.")]
    FutureDate,
}

/// Trimmed, non-empty plant name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlantName(String);

impl PlantName {
    /// Validate and construct a plant name.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, PlantValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(PlantValidationError::EmptyName);
        }
        if trimmed.chars().count() > PLANT_NAME_MAX {
            return Err(PlantValidationError::NameTooLong {
                max: PLANT_NAME_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for PlantName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PlantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PlantName> for String {
    fn from(value: PlantName) -> Self {
        value.0
    }
}

impl TryFrom<String> for PlantName {
    type Error = PlantValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Parse an optional planted date and reject dates after `today`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use garden_journal::domain::plant::{PlantValidationError, parse_planted_date};
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 1).expect("date");
/// assert_eq!(parse_planted_date(Some("2024-05-01"), today), Ok(Some(today)));
/// assert_eq!(parse_planted_date(Some(""), today), Ok(None));
/// assert_eq!(
///     parse_planted_date(Some("2024-05-02"), today),
///     Err(PlantValidationError::FutureDate)
/// );
/// ```
pub fn parse_planted_date(
    raw: Option<&str>,
    today: NaiveDate,
) -> Result<Option<NaiveDate>, PlantValidationError> {
    let Some(text) = raw.map(str::trim).filter(|text| !text.is_empty()) else {
        return Ok(None);
    };
    let date = NaiveDate::parse_from_str(text, PLANTED_DATE_FORMAT)
        .map_err(|_| PlantValidationError::InvalidDate)?;
    if date > today {
        return Err(PlantValidationError::FutureDate);
    }
    Ok(Some(date))
}

/// Plant as stored, with its type resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Plant {
    pub id: PlantId,
    pub garden_id: GardenId,
    #[schema(value_type = String, example = "Cherry tomato")]
    pub name: PlantName,
    pub plant_type: Option<PlantType>,
    pub planted_date: Option<NaiveDate>,
    pub image: Option<String>,
}

/// Raw plant form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlantInput {
    pub name: String,
    pub plant_type_name: String,
    pub planted_date: Option<String>,
    pub image: Option<String>,
}

/// Plant fields that passed validation.
///
/// The type is still a name here; the service resolves it against the
/// registry before writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantDraft {
    pub name: PlantName,
    pub plant_type_name: PlantTypeName,
    pub planted_date: Option<NaiveDate>,
    pub image: Option<String>,
}

impl PlantDraft {
    /// Validate every field of `input` against `today`.
    pub fn validate(input: PlantInput, today: NaiveDate) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.check("name", PlantName::new(&input.name));
        let plant_type_name =
            errors.check("plant_type_name", PlantTypeName::new(&input.plant_type_name));
        let planted_date = errors.check(
            "planted_date",
            parse_planted_date(input.planted_date.as_deref(), today),
        );

        match (name, plant_type_name, planted_date) {
            (Some(name), Some(plant_type_name), Some(planted_date)) => Ok(Self {
                name,
                plant_type_name,
                planted_date,
                image: optional_text(input.image),
            }),
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
    }

    #[fixture]
    fn input() -> PlantInput {
        PlantInput {
            name: "Sungold".into(),
            plant_type_name: " Tomato ".into(),
            planted_date: Some("2024-04-01".into()),
            image: None,
        }
    }

    #[rstest]
    fn valid_plant_normalises_type_name(input: PlantInput, today: NaiveDate) {
        let draft = PlantDraft::validate(input, today).expect("valid");
        assert_eq!(draft.plant_type_name.as_ref(), "Tomato");
        assert_eq!(draft.planted_date, NaiveDate::from_ymd_opt(2024, 4, 1));
    }

    #[rstest]
    #[case("2024-06-16", "Planted date cannot be in the future.")]
    #[case("2030-01-01", "Planted date cannot be in the future.")]
    #[case("15/06/2024", "Enter a valid date.")]
    fn bad_dates_are_field_errors(
        mut input: PlantInput,
        today: NaiveDate,
        #[case] raw: &str,
        #[case] message: &str,
    ) {
        input.planted_date = Some(raw.into());
        let errors = PlantDraft::validate(input, today).expect_err("invalid date");
        assert_eq!(errors.get("planted_date"), Some([message.to_owned()].as_slice()));
    }

    #[rstest]
    fn today_is_accepted(mut input: PlantInput, today: NaiveDate) {
        input.planted_date = Some("2024-06-15".into());
        assert!(PlantDraft::validate(input, today).is_ok());
    }

    #[rstest]
    fn missing_date_is_allowed(mut input: PlantInput, today: NaiveDate) {
        input.planted_date = None;
        let draft = PlantDraft::validate(input, today).expect("valid");
        assert_eq!(draft.planted_date, None);
    }

    #[rstest]
    fn blank_type_and_name_are_both_reported(mut input: PlantInput, today: NaiveDate) {
        input.name = String::new();
        input.plant_type_name = "  ".into();
        let errors = PlantDraft::validate(input, today).expect_err("invalid");
        assert!(errors.contains("name"));
        assert_eq!(
            errors.get("plant_type_name"),
            Some(["Please enter a plant type.".to_owned()].as_slice())
        );
    }
}
