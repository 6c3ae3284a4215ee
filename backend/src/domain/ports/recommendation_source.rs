//! Port for producing advisory text about a plant.

use async_trait::async_trait;

use crate::domain::Plant;

use super::define_port_error;

define_port_error! {
    /// Errors raised by recommendation source adapters.
    pub enum RecommendationSourceError {
        /// The source could not be reached.
        Unavailable { message: String } => "recommendation source unavailable: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecommendationSource: Send + Sync {
    /// Advice text for `plant`.
    async fn recommend(&self, plant: &Plant) -> Result<String, RecommendationSourceError>;
}
