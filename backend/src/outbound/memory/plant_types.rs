use async_trait::async_trait;

use super::MemoryStore;
use crate::domain::ports::{PlantTypeRepository, PlantTypeRepositoryError};
use crate::domain::{PlantType, PlantTypeId};

#[async_trait]
impl PlantTypeRepository for MemoryStore {
    async fn get_or_create(
        &self,
        candidate: &PlantType,
    ) -> Result<PlantType, PlantTypeRepositoryError> {
        let mut tables = self.lock(PlantTypeRepositoryError::query)?;
        if let Some(existing) = tables
            .plant_types
            .values()
            .find(|kind| kind.name == candidate.name)
        {
            return Ok(existing.clone());
        }
        tables.plant_types.insert(candidate.id, candidate.clone());
        Ok(candidate.clone())
    }

    async fn find_by_id(
        &self,
        id: &PlantTypeId,
    ) -> Result<Option<PlantType>, PlantTypeRepositoryError> {
        let tables = self.lock(PlantTypeRepositoryError::query)?;
        Ok(tables.plant_types.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<PlantType>, PlantTypeRepositoryError> {
        let tables = self.lock(PlantTypeRepositoryError::query)?;
        let mut kinds: Vec<PlantType> = tables.plant_types.values().cloned().collect();
        kinds.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(kinds)
    }

    async fn delete(&self, id: &PlantTypeId) -> Result<bool, PlantTypeRepositoryError> {
        let mut tables = self.lock(PlantTypeRepositoryError::query)?;
        if tables.plant_types.remove(id).is_none() {
            return Ok(false);
        }
        for plant in tables.plants.values_mut() {
            if plant.plant_type_id.as_ref() == Some(id) {
                plant.plant_type_id = None;
            }
        }
        Ok(true)
    }
}
