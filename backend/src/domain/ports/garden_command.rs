//! Driving port for garden mutations.

use async_trait::async_trait;

use crate::domain::{Error, Garden, GardenId, GardenInput, UserId};

/// Driving port for creating, editing and deleting gardens.
///
/// Permission failures surface as `forbidden` errors so the inbound adapter
/// can redirect without revealing whether the garden exists for someone else.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GardenCommand: Send + Sync {
    /// Create a garden owned by `user`.
    async fn create_garden(&self, user: &UserId, input: GardenInput) -> Result<Garden, Error>;

    /// Update a visible garden. The sharing set only changes when `user`
    /// owns the garden.
    async fn update_garden(
        &self,
        user: &UserId,
        garden: &GardenId,
        input: GardenInput,
    ) -> Result<Garden, Error>;

    /// Delete a garden owned by `user`, cascading to its plants.
    async fn delete_garden(&self, user: &UserId, garden: &GardenId) -> Result<(), Error>;
}
