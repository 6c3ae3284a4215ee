//! Port for plant persistence.

use async_trait::async_trait;

use crate::domain::{GardenId, Plant, PlantId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by plant repository adapters.
    pub enum PlantRepositoryError for "plant repository" {}
}

/// Port for reading and writing plants.
///
/// Adapters store only the identifier of `Plant::plant_type` and resolve the
/// full type on reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlantRepository: Send + Sync {
    /// Insert a plant.
    async fn create(&self, plant: &Plant) -> Result<(), PlantRepositoryError>;

    /// Replace the mutable fields of a plant.
    async fn update(&self, plant: &Plant) -> Result<(), PlantRepositoryError>;

    /// Delete a plant, its recommendations and its note links atomically.
    /// Returns whether a row was removed.
    async fn delete(&self, id: &PlantId) -> Result<bool, PlantRepositoryError>;

    /// Fetch a plant by identifier.
    async fn find_by_id(&self, id: &PlantId) -> Result<Option<Plant>, PlantRepositoryError>;

    /// Plants of a garden, by name.
    async fn list_for_garden(&self, garden: &GardenId)
    -> Result<Vec<Plant>, PlantRepositoryError>;
}
