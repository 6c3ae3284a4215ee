//! Port for the append-only recommendation log.

use async_trait::async_trait;

use crate::domain::{PlantId, Recommendation};

use super::define_port_error;

define_port_error! {
    /// Errors raised by recommendation repository adapters.
    pub enum RecommendationRepositoryError for "recommendation repository" {}
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationRepository: Send + Sync {
    /// Append a recommendation.
    async fn create(&self, recommendation: &Recommendation)
    -> Result<(), RecommendationRepositoryError>;

    /// Most recent recommendation for `plant`.
    async fn latest_for_plant(
        &self,
        plant: &PlantId,
    ) -> Result<Option<Recommendation>, RecommendationRepositoryError>;

    /// Every recommendation for `plant`, newest first.
    async fn list_for_plant(
        &self,
        plant: &PlantId,
    ) -> Result<Vec<Recommendation>, RecommendationRepositoryError>;
}
