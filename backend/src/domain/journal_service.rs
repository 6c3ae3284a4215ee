//! Journal domain service: notes and recommendations posted from the garden
//! detail view.
//!
//! A recommendation is generated for the plant selected in the view and is
//! skipped when nothing is selected. A note names its own plants, so it is
//! written whenever the garden has plants, whatever the selection. Both
//! actions are inert on a garden without plants.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, info};

use crate::domain::ports::{
    JournalCommand, JournalOutcome, JournalRepositories, PlantSelection, RecommendationSource,
};
use crate::domain::service_support::{
    map_note_error, map_plant_error, map_recommendation_error, map_source_error, visible_garden,
};
use crate::domain::{
    Error, FieldErrors, GardenId, Note, NoteDraft, NoteId, NoteInput, Plant, PlantId,
    Recommendation, RecommendationId, UserId,
};

/// Journal service implementing [`JournalCommand`].
#[derive(Clone)]
pub struct JournalService {
    repos: JournalRepositories,
    advisor: Arc<dyn RecommendationSource>,
    clock: Arc<dyn Clock>,
}

impl JournalService {
    /// Create the service from repositories, an advice source and a clock.
    pub fn new(
        repos: JournalRepositories,
        advisor: Arc<dyn RecommendationSource>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repos,
            advisor,
            clock,
        }
    }

    /// Plants of an editable garden plus the one the view has selected.
    async fn selected_plant(
        &self,
        user: &UserId,
        garden: &GardenId,
        selection: PlantSelection,
    ) -> Result<(Vec<Plant>, Option<Plant>), Error> {
        let (garden, access) = visible_garden(self.repos.gardens.as_ref(), user, garden).await?;
        access.require_edit()?;
        let plants = self
            .repos
            .plants
            .list_for_garden(&garden.id)
            .await
            .map_err(map_plant_error)?;
        let selected = selection.pick(&plants).cloned();
        if selected.is_none() {
            debug!(garden_id = %garden.id, "journal action without a selected plant");
        }
        Ok((plants, selected))
    }
}

#[async_trait]
impl JournalCommand for JournalService {
    async fn add_note(
        &self,
        user: &UserId,
        garden: &GardenId,
        selection: PlantSelection,
        input: NoteInput,
    ) -> Result<JournalOutcome<Note>, Error> {
        let (plants, selected) = self.selected_plant(user, garden, selection).await?;
        if plants.is_empty() {
            return Ok(JournalOutcome::inert());
        }

        let choices: BTreeSet<PlantId> = plants.iter().map(|plant| plant.id).collect();
        let draft = NoteDraft::validate(input, &choices).map_err(FieldErrors::into_error)?;
        let now = self.clock.utc();
        let note = Note {
            id: NoteId::random(),
            content: draft.content,
            date: now.date_naive(),
            created_at: now,
            image: draft.image,
            plant_ids: draft.plant_ids,
        };
        self.repos
            .notes
            .create(&note)
            .await
            .map_err(map_note_error)?;

        info!(note_id = %note.id, garden_id = %garden, plants = note.plant_ids.len(), "note added");
        Ok(JournalOutcome {
            selected_plant: selected.map(|plant| plant.id),
            written: Some(note),
        })
    }

    async fn generate_recommendation(
        &self,
        user: &UserId,
        garden: &GardenId,
        selection: PlantSelection,
    ) -> Result<JournalOutcome<Recommendation>, Error> {
        let (_, selected) = self.selected_plant(user, garden, selection).await?;
        let Some(plant) = selected else {
            return Ok(JournalOutcome::inert());
        };

        let text = self
            .advisor
            .recommend(&plant)
            .await
            .map_err(map_source_error)?;
        let recommendation = Recommendation {
            id: RecommendationId::random(),
            plant_id: plant.id,
            text,
            created_at: self.clock.utc(),
        };
        self.repos
            .recommendations
            .create(&recommendation)
            .await
            .map_err(map_recommendation_error)?;

        info!(
            plant_id = %plant.id,
            recommendation_id = %recommendation.id,
            "recommendation recorded"
        );
        Ok(JournalOutcome {
            selected_plant: Some(plant.id),
            written: Some(recommendation),
        })
    }
}

#[cfg(test)]
#[path = "journal_service_tests.rs"]
mod tests;
