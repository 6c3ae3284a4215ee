//! Driving port for plant reads.

use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Error, Garden, GardenId, Plant, PlantId, Recommendation, UserId};

/// A plant with the garden it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantView {
    pub garden: Garden,
    pub plant: Plant,
}

/// Full recommendation log of one plant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecommendations {
    pub plant: Plant,
    /// Newest first.
    pub recommendations: Vec<Recommendation>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlantQuery: Send + Sync {
    /// A plant addressed through its garden.
    async fn plant_view(
        &self,
        user: &UserId,
        garden: &GardenId,
        plant: &PlantId,
    ) -> Result<PlantView, Error>;

    /// Every recommendation recorded for a plant.
    async fn plant_recommendations(
        &self,
        user: &UserId,
        plant: &PlantId,
    ) -> Result<PlantRecommendations, Error>;
}
