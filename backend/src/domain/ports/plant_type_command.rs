//! Driving port for the plant type registry.

use async_trait::async_trait;

use crate::domain::{Error, PlantType, PlantTypeId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlantTypeCommand: Send + Sync {
    /// Register `name`, returning the existing type when it is already known.
    async fn add_plant_type(&self, name: &str) -> Result<PlantType, Error>;

    /// Remove a type; plants using it keep existing without a type.
    async fn delete_plant_type(&self, id: &PlantTypeId) -> Result<(), Error>;
}
