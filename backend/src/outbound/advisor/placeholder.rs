//! Recommendation source that returns fixed advice.

use async_trait::async_trait;

use crate::domain::ports::{RecommendationSource, RecommendationSourceError};
use crate::domain::{Plant, placeholder_recommendation};

/// Stand-in advisor; every plant gets the same watering and pest reminder.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlaceholderAdvisor;

#[async_trait]
impl RecommendationSource for PlaceholderAdvisor {
    async fn recommend(&self, plant: &Plant) -> Result<String, RecommendationSourceError> {
        Ok(placeholder_recommendation(&plant.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GardenId;
    use crate::test_support::sample_plant;

    #[tokio::test]
    async fn advice_names_the_plant() {
        let plant = sample_plant(GardenId::random(), "Rosemary");
        let text = PlaceholderAdvisor.recommend(&plant).await.expect("advice");
        assert_eq!(
            text,
            "AI Suggestion for Rosemary: Water regularly and check for pests. \
             (This is a placeholder recommendation.)"
        );
    }
}
