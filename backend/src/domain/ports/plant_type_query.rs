//! Driving port for reading the plant type registry.

use async_trait::async_trait;

use crate::domain::{Error, PlantType, PlantTypeId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlantTypeQuery: Send + Sync {
    /// Every type, by name.
    async fn list_plant_types(&self) -> Result<Vec<PlantType>, Error>;

    /// A single type.
    async fn plant_type(&self, id: &PlantTypeId) -> Result<PlantType, Error>;
}
