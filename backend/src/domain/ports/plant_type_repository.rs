//! Port for the shared plant type registry.

use async_trait::async_trait;

use crate::domain::{PlantType, PlantTypeId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by plant type repository adapters.
    pub enum PlantTypeRepositoryError for "plant type repository" {}
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlantTypeRepository: Send + Sync {
    /// Return the type named `candidate.name`, inserting `candidate` when no
    /// such name exists yet. Concurrent callers converge on one row.
    async fn get_or_create(&self, candidate: &PlantType)
    -> Result<PlantType, PlantTypeRepositoryError>;

    /// Fetch a type by identifier.
    async fn find_by_id(&self, id: &PlantTypeId)
    -> Result<Option<PlantType>, PlantTypeRepositoryError>;

    /// Every registered type, by name.
    async fn list_all(&self) -> Result<Vec<PlantType>, PlantTypeRepositoryError>;

    /// Delete a type, clearing it from every plant that used it. Returns
    /// whether a row was removed.
    async fn delete(&self, id: &PlantTypeId) -> Result<bool, PlantTypeRepositoryError>;
}
