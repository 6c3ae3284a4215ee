//! Per-plant advisory log.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::{PlantId, PlantName, RecommendationId};

/// Advisory text recorded against a plant. Rows are never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: RecommendationId,
    pub plant_id: PlantId,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Fixed advice produced until a real model is wired in.
///
/// # Examples
/// ```
/// use garden_journal::domain::{PlantName, placeholder_recommendation};
///
/// let name = PlantName::new("Basil").expect("valid");
/// assert!(placeholder_recommendation(&name).starts_with("AI Suggestion for Basil:"));
/// ```
pub fn placeholder_recommendation(plant: &PlantName) -> String {
    format!(
        "AI Suggestion for {plant}: Water regularly and check for pests. \
         (This is a placeholder recommendation.)"
    )
}
