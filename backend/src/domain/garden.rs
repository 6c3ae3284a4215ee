//! Gardens and their sharing set.
//!
//! A garden has exactly one owner, fixed at creation. Other users gain access
//! through the sharing set, which never contains the owner.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::optional_text;
use super::{FieldErrors, GardenAccess, GardenId, UserId};

/// Maximum garden name length in characters.
pub const GARDEN_NAME_MAX: usize = 100;

/// Validation errors for [`GardenName::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GardenValidationError {
    #[error("This field is required.")]
    EmptyName,
    #[error("Ensure this value has at most {max} characters.")]
    NameTooLong { max: usize },
}

/// Trimmed, non-empty display name of a garden.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GardenName(String);

impl GardenName {
    /// Validate and construct a garden name.
    ///
    /// # Examples
    /// ```
    /// use garden_journal::domain::GardenName;
    ///
    /// assert_eq!(GardenName::new(" Balcony ").expect("valid").as_ref(), "Balcony");
    /// assert!(GardenName::new("").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self, GardenValidationError> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(GardenValidationError::EmptyName);
        }
        if trimmed.chars().count() > GARDEN_NAME_MAX {
            return Err(GardenValidationError::NameTooLong {
                max: GARDEN_NAME_MAX,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for GardenName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for GardenName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<GardenName> for String {
    fn from(value: GardenName) -> Self {
        value.0
    }
}

impl TryFrom<String> for GardenName {
    type Error = GardenValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Garden aggregate as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Garden {
    pub id: GardenId,
    pub owner_id: UserId,
    #[schema(value_type = String, example = "Balcony")]
    pub name: GardenName,
    pub description: Option<String>,
    /// Opaque reference path of the garden photo.
    pub image: Option<String>,
    #[schema(value_type = Vec<String>)]
    pub shared_user_ids: BTreeSet<UserId>,
}

impl Garden {
    /// Permissions `user` holds on this garden.
    pub fn access_for(&self, user: &UserId) -> GardenAccess {
        GardenAccess::resolve(&self.owner_id, &self.shared_user_ids, user)
    }

    /// Whether `user` owns the garden.
    pub fn is_owned_by(&self, user: &UserId) -> bool {
        &self.owner_id == user
    }
}

/// Raw garden form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GardenInput {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    /// Submitted user ids, one entry per repeated `shared_users` key.
    pub shared_users: Vec<String>,
}

/// Garden fields that passed validation.
///
/// Existence of the shared users is checked by the service, which has the
/// user repository at hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GardenDraft {
    pub name: GardenName,
    pub description: Option<String>,
    pub image: Option<String>,
    pub shared_user_ids: BTreeSet<UserId>,
}

impl GardenDraft {
    /// Validate every field of `input`, collecting all failures.
    ///
    /// Blank entries in the sharing list are skipped and duplicates collapse.
    pub fn validate(input: GardenInput) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let name = errors.check("name", GardenName::new(&input.name));

        let mut shared_user_ids = BTreeSet::new();
        for raw in input.shared_users.iter().map(|raw| raw.trim()) {
            if raw.is_empty() {
                continue;
            }
            match UserId::new(raw) {
                Ok(id) => {
                    shared_user_ids.insert(id);
                }
                Err(_) => errors.add("shared_users", unknown_choice(raw)),
            }
        }

        match name {
            Some(name) if errors.is_empty() => Ok(Self {
                name,
                description: optional_text(input.description),
                image: optional_text(input.image),
                shared_user_ids,
            }),
            _ => Err(errors),
        }
    }

    /// Drop `owner` from the sharing set.
    pub fn without_owner(mut self, owner: &UserId) -> Self {
        self.shared_user_ids.remove(owner);
        self
    }
}

/// Message reported for a submitted choice outside the offered options.
pub fn unknown_choice(value: &str) -> String {
    format!("Select a valid choice. {value} is not one of the available choices.")
}
