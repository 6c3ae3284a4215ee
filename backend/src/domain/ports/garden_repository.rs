//! Port for garden persistence, including the sharing set.

use async_trait::async_trait;

use crate::domain::{Garden, GardenId, UserId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by garden repository adapters.
    pub enum GardenRepositoryError for "garden repository" {}
}

/// Port for reading and writing gardens.
///
/// Writes replace the sharing set wholesale and must be atomic with the
/// garden row itself.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GardenRepository: Send + Sync {
    /// Insert a garden and its sharing set.
    async fn create(&self, garden: &Garden) -> Result<(), GardenRepositoryError>;

    /// Replace the fields and sharing set of an existing garden.
    async fn update(&self, garden: &Garden) -> Result<(), GardenRepositoryError>;

    /// Delete a garden together with its plants, their recommendations and
    /// their note links. Returns whether a row was removed.
    async fn delete(&self, id: &GardenId) -> Result<bool, GardenRepositoryError>;

    /// Fetch a garden by identifier.
    async fn find_by_id(&self, id: &GardenId) -> Result<Option<Garden>, GardenRepositoryError>;

    /// Gardens owned by `user`, by name.
    async fn list_owned_by(&self, user: &UserId) -> Result<Vec<Garden>, GardenRepositoryError>;

    /// Gardens whose sharing set contains `user`, by name.
    async fn list_shared_with(&self, user: &UserId)
    -> Result<Vec<Garden>, GardenRepositoryError>;
}
