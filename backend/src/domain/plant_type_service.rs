//! Plant type registry service.
//!
//! The registry is global, so these operations only require an authenticated
//! caller; no garden permission applies.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{PlantTypeCommand, PlantTypeQuery, PlantTypeRepository};
use crate::domain::service_support::map_plant_type_error;
use crate::domain::{Error, FieldErrors, PlantType, PlantTypeId, PlantTypeName};

/// Registry service implementing [`PlantTypeCommand`] and [`PlantTypeQuery`].
#[derive(Clone)]
pub struct PlantTypeService<R: ?Sized> {
    plant_type_repo: Arc<R>,
}

impl<R: ?Sized> PlantTypeService<R> {
    /// Create a new registry service over the plant type repository.
    pub fn new(plant_type_repo: Arc<R>) -> Self {
        Self { plant_type_repo }
    }
}

fn not_found(id: &PlantTypeId) -> Error {
    Error::not_found(format!("plant type {id} not found"))
}

#[async_trait]
impl<R> PlantTypeCommand for PlantTypeService<R>
where
    R: PlantTypeRepository + ?Sized,
{
    async fn add_plant_type(&self, name: &str) -> Result<PlantType, Error> {
        let mut errors = FieldErrors::new();
        let Some(name) = errors.check("name", PlantTypeName::new(name)) else {
            return Err(errors.into_error());
        };
        let candidate = PlantType {
            id: PlantTypeId::random(),
            name,
        };
        let stored = self
            .plant_type_repo
            .get_or_create(&candidate)
            .await
            .map_err(map_plant_type_error)?;
        if stored.id == candidate.id {
            info!(plant_type_id = %stored.id, name = %stored.name, "plant type registered");
        }
        Ok(stored)
    }

    async fn delete_plant_type(&self, id: &PlantTypeId) -> Result<(), Error> {
        let removed = self
            .plant_type_repo
            .delete(id)
            .await
            .map_err(map_plant_type_error)?;
        if !removed {
            return Err(not_found(id));
        }
        info!(plant_type_id = %id, "plant type deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> PlantTypeQuery for PlantTypeService<R>
where
    R: PlantTypeRepository + ?Sized,
{
    async fn list_plant_types(&self) -> Result<Vec<PlantType>, Error> {
        self.plant_type_repo
            .list_all()
            .await
            .map_err(map_plant_type_error)
    }

    async fn plant_type(&self, id: &PlantTypeId) -> Result<PlantType, Error> {
        self.plant_type_repo
            .find_by_id(id)
            .await
            .map_err(map_plant_type_error)?
            .ok_or_else(|| not_found(id))
    }
}
