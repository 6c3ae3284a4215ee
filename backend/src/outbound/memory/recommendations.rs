use async_trait::async_trait;

use super::MemoryStore;
use crate::domain::ports::{RecommendationRepository, RecommendationRepositoryError};
use crate::domain::{PlantId, Recommendation};

#[async_trait]
impl RecommendationRepository for MemoryStore {
    async fn create(
        &self,
        recommendation: &Recommendation,
    ) -> Result<(), RecommendationRepositoryError> {
        let mut tables = self.lock(RecommendationRepositoryError::query)?;
        if !tables.plants.contains_key(&recommendation.plant_id) {
            return Err(RecommendationRepositoryError::query(format!(
                "plant {} does not exist",
                recommendation.plant_id
            )));
        }
        tables.recommendations.push(recommendation.clone());
        Ok(())
    }

    async fn latest_for_plant(
        &self,
        plant: &PlantId,
    ) -> Result<Option<Recommendation>, RecommendationRepositoryError> {
        let log = RecommendationRepository::list_for_plant(self, plant).await?;
        Ok(log.into_iter().next())
    }

    async fn list_for_plant(
        &self,
        plant: &PlantId,
    ) -> Result<Vec<Recommendation>, RecommendationRepositoryError> {
        let tables = self.lock(RecommendationRepositoryError::query)?;
        let mut log: Vec<Recommendation> = tables
            .recommendations
            .iter()
            .filter(|recommendation| &recommendation.plant_id == plant)
            .cloned()
            .collect();
        // Later pushes win ties so equal timestamps still list newest first.
        log.reverse();
        log.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(log)
    }
}
