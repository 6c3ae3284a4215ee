use async_trait::async_trait;

use super::{MemoryStore, PlantRow};
use crate::domain::ports::{PlantRepository, PlantRepositoryError};
use crate::domain::{GardenId, Plant, PlantId};

#[async_trait]
impl PlantRepository for MemoryStore {
    async fn create(&self, plant: &Plant) -> Result<(), PlantRepositoryError> {
        let mut tables = self.lock(PlantRepositoryError::query)?;
        if !tables.gardens.contains_key(&plant.garden_id) {
            return Err(PlantRepositoryError::query(format!(
                "garden {} does not exist",
                plant.garden_id
            )));
        }
        tables.plants.insert(plant.id, PlantRow::from_plant(plant));
        Ok(())
    }

    async fn update(&self, plant: &Plant) -> Result<(), PlantRepositoryError> {
        let mut tables = self.lock(PlantRepositoryError::query)?;
        match tables.plants.get_mut(&plant.id) {
            Some(stored) => {
                *stored = PlantRow::from_plant(plant);
                Ok(())
            }
            None => Err(PlantRepositoryError::query(format!(
                "plant {} does not exist",
                plant.id
            ))),
        }
    }

    async fn delete(&self, id: &PlantId) -> Result<bool, PlantRepositoryError> {
        let mut tables = self.lock(PlantRepositoryError::query)?;
        if !tables.plants.contains_key(id) {
            return Ok(false);
        }
        tables.cascade_plants(&[*id]);
        Ok(true)
    }

    async fn find_by_id(&self, id: &PlantId) -> Result<Option<Plant>, PlantRepositoryError> {
        let tables = self.lock(PlantRepositoryError::query)?;
        Ok(tables.plants.get(id).map(|row| tables.resolve_plant(row)))
    }

    async fn list_for_garden(
        &self,
        garden: &GardenId,
    ) -> Result<Vec<Plant>, PlantRepositoryError> {
        let tables = self.lock(PlantRepositoryError::query)?;
        let mut plants: Vec<Plant> = tables
            .plants
            .values()
            .filter(|row| &row.garden_id == garden)
            .map(|row| tables.resolve_plant(row))
            .collect();
        plants.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(plants)
    }
}
