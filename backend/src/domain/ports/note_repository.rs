//! Port for journal note persistence.

use async_trait::async_trait;

use crate::domain::{Note, PlantId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by note repository adapters.
    pub enum NoteRepositoryError for "note repository" {}
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Insert a note and its plant links in one transaction.
    async fn create(&self, note: &Note) -> Result<(), NoteRepositoryError>;

    /// Notes linked to `plant`, newest date first with creation time breaking
    /// ties.
    async fn list_for_plant(&self, plant: &PlantId) -> Result<Vec<Note>, NoteRepositoryError>;
}
