use async_trait::async_trait;

use super::MemoryStore;
use crate::domain::ports::{GardenRepository, GardenRepositoryError};
use crate::domain::{Garden, GardenId, PlantId, UserId};

fn by_name(mut gardens: Vec<Garden>) -> Vec<Garden> {
    gardens.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    gardens
}

#[async_trait]
impl GardenRepository for MemoryStore {
    async fn create(&self, garden: &Garden) -> Result<(), GardenRepositoryError> {
        let mut tables = self.lock(GardenRepositoryError::query)?;
        tables.gardens.insert(garden.id, garden.clone());
        Ok(())
    }

    async fn update(&self, garden: &Garden) -> Result<(), GardenRepositoryError> {
        let mut tables = self.lock(GardenRepositoryError::query)?;
        match tables.gardens.get_mut(&garden.id) {
            Some(stored) => {
                *stored = garden.clone();
                Ok(())
            }
            None => Err(GardenRepositoryError::query(format!(
                "garden {} does not exist",
                garden.id
            ))),
        }
    }

    async fn delete(&self, id: &GardenId) -> Result<bool, GardenRepositoryError> {
        let mut tables = self.lock(GardenRepositoryError::query)?;
        if tables.gardens.remove(id).is_none() {
            return Ok(false);
        }
        let doomed: Vec<PlantId> = tables
            .plants
            .values()
            .filter(|plant| &plant.garden_id == id)
            .map(|plant| plant.id)
            .collect();
        tables.cascade_plants(&doomed);
        Ok(true)
    }

    async fn find_by_id(&self, id: &GardenId) -> Result<Option<Garden>, GardenRepositoryError> {
        let tables = self.lock(GardenRepositoryError::query)?;
        Ok(tables.gardens.get(id).cloned())
    }

    async fn list_owned_by(&self, user: &UserId) -> Result<Vec<Garden>, GardenRepositoryError> {
        let tables = self.lock(GardenRepositoryError::query)?;
        Ok(by_name(
            tables
                .gardens
                .values()
                .filter(|garden| &garden.owner_id == user)
                .cloned()
                .collect(),
        ))
    }

    async fn list_shared_with(
        &self,
        user: &UserId,
    ) -> Result<Vec<Garden>, GardenRepositoryError> {
        let tables = self.lock(GardenRepositoryError::query)?;
        Ok(by_name(
            tables
                .gardens
                .values()
                .filter(|garden| garden.shared_user_ids.contains(user))
                .cloned()
                .collect(),
        ))
    }
}
