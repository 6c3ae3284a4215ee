//! Dated journal notes attached to plants.
//!
//! A note is written once. Its date is assigned by the server and the set of
//! plants it mentions may only shrink, which happens when a plant is deleted.

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::garden::unknown_choice;
use super::validation::optional_text;
use super::{FieldErrors, NoteId, PlantId};

const REQUIRED: &str = "This field is required.";

/// Journal entry as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub content: String,
    /// Calendar day the note was written.
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub image: Option<String>,
    #[schema(value_type = Vec<String>)]
    pub plant_ids: BTreeSet<PlantId>,
}

/// Raw note form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteInput {
    pub content: String,
    pub image: Option<String>,
    /// Submitted plant ids, one entry per repeated `plants` key.
    pub plants: Vec<String>,
}

/// Note fields that passed validation against one garden's plants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    pub content: String,
    pub image: Option<String>,
    pub plant_ids: BTreeSet<PlantId>,
}

impl NoteDraft {
    /// Validate `input`, accepting only plants listed in `garden_plants`.
    ///
    /// # Examples
    /// ```
    /// use std::collections::BTreeSet;
    /// use garden_journal::domain::{NoteDraft, NoteInput, PlantId};
    ///
    /// let plant = PlantId::random();
    /// let input = NoteInput {
    ///     content: "First flowers".into(),
    ///     image: None,
    ///     plants: vec![plant.to_string()],
    /// };
    /// let draft = NoteDraft::validate(input, &BTreeSet::from([plant])).expect("valid note");
    /// assert!(draft.plant_ids.contains(&plant));
    /// ```
    pub fn validate(
        input: NoteInput,
        garden_plants: &BTreeSet<PlantId>,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let content = input.content.trim();
        if content.is_empty() {
            errors.add("content", REQUIRED);
        }

        let mut plant_ids = BTreeSet::new();
        for raw in input.plants.iter().map(|raw| raw.trim()).filter(|raw| !raw.is_empty()) {
            match PlantId::new(raw) {
                Ok(id) if garden_plants.contains(&id) => {
                    plant_ids.insert(id);
                }
                _ => errors.add("plants", unknown_choice(raw)),
            }
        }
        if plant_ids.is_empty() && !errors.contains("plants") {
            errors.add("plants", REQUIRED);
        }

        if errors.is_empty() {
            Ok(Self {
                content: content.to_owned(),
                image: optional_text(input.image),
                plant_ids,
            })
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn garden_plants() -> BTreeSet<PlantId> {
        BTreeSet::from([PlantId::random(), PlantId::random()])
    }

    #[rstest]
    fn content_and_plants_are_required(garden_plants: BTreeSet<PlantId>) {
        let errors = NoteDraft::validate(NoteInput::default(), &garden_plants).expect_err("empty");
        assert_eq!(errors.get("content"), Some([REQUIRED.to_owned()].as_slice()));
        assert_eq!(errors.get("plants"), Some([REQUIRED.to_owned()].as_slice()));
    }

    #[rstest]
    fn plants_outside_the_garden_are_rejected(garden_plants: BTreeSet<PlantId>) {
        let stranger = PlantId::random();
        let mut plants: Vec<String> = garden_plants.iter().map(ToString::to_string).collect();
        plants.push(stranger.to_string());
        let input = NoteInput {
            content: "Aphids again".into(),
            image: None,
            plants,
        };

        let errors = NoteDraft::validate(input, &garden_plants).expect_err("foreign plant");
        let messages = errors.get("plants").expect("plants error");
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains(&stranger.to_string()));
    }

    #[rstest]
    fn multiple_plants_are_linked(garden_plants: BTreeSet<PlantId>) {
        let input = NoteInput {
            content: "  Watered everything  ".into(),
            image: Some("notes/watering.jpg".into()),
            plants: garden_plants.iter().map(ToString::to_string).collect(),
        };

        let draft = NoteDraft::validate(input, &garden_plants).expect("valid");
        assert_eq!(draft.content, "Watered everything");
        assert_eq!(draft.plant_ids, garden_plants);
    }
}
