//! Plant domain service.
//!
//! Plants inherit the permissions of their garden. Creating or editing a
//! plant resolves its free-text type through the shared registry, creating a
//! registry entry the first time a name is used.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::info;

use crate::domain::ports::{
    JournalRepositories, PlantCommand, PlantQuery, PlantRecommendations, PlantView,
};
use crate::domain::service_support::{
    map_plant_error, map_plant_type_error, map_recommendation_error, plant_in_garden,
    visible_garden,
};
use crate::domain::{
    Error, FieldErrors, GardenId, Plant, PlantDraft, PlantId, PlantInput, PlantType,
    PlantTypeId, PlantTypeName, UserId,
};

/// Plant service implementing [`PlantCommand`] and [`PlantQuery`].
#[derive(Clone)]
pub struct PlantService {
    repos: JournalRepositories,
    clock: Arc<dyn Clock>,
}

impl PlantService {
    /// Create the service; `clock` decides what "today" is for planted dates.
    pub fn new(repos: JournalRepositories, clock: Arc<dyn Clock>) -> Self {
        Self { repos, clock }
    }

    fn validate(&self, input: PlantInput) -> Result<PlantDraft, Error> {
        let today = self.clock.utc().date_naive();
        PlantDraft::validate(input, today).map_err(FieldErrors::into_error)
    }

    async fn resolve_type(&self, name: PlantTypeName) -> Result<PlantType, Error> {
        let candidate = PlantType {
            id: PlantTypeId::random(),
            name,
        };
        self.repos
            .plant_types
            .get_or_create(&candidate)
            .await
            .map_err(map_plant_type_error)
    }
}

#[async_trait]
impl PlantCommand for PlantService {
    async fn create_plant(
        &self,
        user: &UserId,
        garden: &GardenId,
        input: PlantInput,
    ) -> Result<Plant, Error> {
        let (garden, access) = visible_garden(self.repos.gardens.as_ref(), user, garden).await?;
        access.require_edit()?;
        let draft = self.validate(input)?;
        let plant_type = self.resolve_type(draft.plant_type_name).await?;

        let plant = Plant {
            id: PlantId::random(),
            garden_id: garden.id,
            name: draft.name,
            plant_type: Some(plant_type),
            planted_date: draft.planted_date,
            image: draft.image,
        };
        self.repos
            .plants
            .create(&plant)
            .await
            .map_err(map_plant_error)?;

        info!(plant_id = %plant.id, garden_id = %garden.id, user_id = %user, "plant created");
        Ok(plant)
    }

    async fn update_plant(
        &self,
        user: &UserId,
        garden: &GardenId,
        plant: &PlantId,
        input: PlantInput,
    ) -> Result<Plant, Error> {
        let (garden, access) = visible_garden(self.repos.gardens.as_ref(), user, garden).await?;
        access.require_edit()?;
        let existing = plant_in_garden(self.repos.plants.as_ref(), &garden.id, plant).await?;
        let draft = self.validate(input)?;
        let plant_type = self.resolve_type(draft.plant_type_name).await?;

        let updated = Plant {
            id: existing.id,
            garden_id: existing.garden_id,
            name: draft.name,
            plant_type: Some(plant_type),
            planted_date: draft.planted_date,
            image: draft.image,
        };
        self.repos
            .plants
            .update(&updated)
            .await
            .map_err(map_plant_error)?;

        info!(plant_id = %updated.id, garden_id = %garden.id, user_id = %user, "plant updated");
        Ok(updated)
    }

    async fn delete_plant(
        &self,
        user: &UserId,
        garden: &GardenId,
        plant: &PlantId,
    ) -> Result<(), Error> {
        let (garden, access) = visible_garden(self.repos.gardens.as_ref(), user, garden).await?;
        access.require_edit()?;
        let existing = plant_in_garden(self.repos.plants.as_ref(), &garden.id, plant).await?;
        self.repos
            .plants
            .delete(&existing.id)
            .await
            .map_err(map_plant_error)?;

        info!(plant_id = %existing.id, garden_id = %garden.id, user_id = %user, "plant deleted");
        Ok(())
    }
}

#[async_trait]
impl PlantQuery for PlantService {
    async fn plant_view(
        &self,
        user: &UserId,
        garden: &GardenId,
        plant: &PlantId,
    ) -> Result<PlantView, Error> {
        let (garden, _) = visible_garden(self.repos.gardens.as_ref(), user, garden).await?;
        let plant = plant_in_garden(self.repos.plants.as_ref(), &garden.id, plant).await?;
        Ok(PlantView { garden, plant })
    }

    async fn plant_recommendations(
        &self,
        user: &UserId,
        plant: &PlantId,
    ) -> Result<PlantRecommendations, Error> {
        let plant = self
            .repos
            .plants
            .find_by_id(plant)
            .await
            .map_err(map_plant_error)?
            .ok_or_else(|| Error::not_found(format!("plant {plant} not found")))?;
        visible_garden(self.repos.gardens.as_ref(), user, &plant.garden_id).await?;
        let recommendations = self
            .repos
            .recommendations
            .list_for_plant(&plant.id)
            .await
            .map_err(map_recommendation_error)?;
        Ok(PlantRecommendations {
            plant,
            recommendations,
        })
    }
}

#[cfg(test)]
#[path = "plant_service_tests.rs"]
mod tests;
