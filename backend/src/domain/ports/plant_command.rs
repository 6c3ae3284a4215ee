//! Driving port for plant mutations within a garden.

use async_trait::async_trait;

use crate::domain::{Error, GardenId, Plant, PlantId, PlantInput, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlantCommand: Send + Sync {
    /// Add a plant to a visible garden, registering its type on first use.
    async fn create_plant(
        &self,
        user: &UserId,
        garden: &GardenId,
        input: PlantInput,
    ) -> Result<Plant, Error>;

    /// Edit a plant of a visible garden.
    async fn update_plant(
        &self,
        user: &UserId,
        garden: &GardenId,
        plant: &PlantId,
        input: PlantInput,
    ) -> Result<Plant, Error>;

    /// Delete a plant of a visible garden.
    async fn delete_plant(
        &self,
        user: &UserId,
        garden: &GardenId,
        plant: &PlantId,
    ) -> Result<(), Error>;
}
