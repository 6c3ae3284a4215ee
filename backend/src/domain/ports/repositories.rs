//! Bundle of the journal's driven persistence ports.

use std::sync::Arc;

use super::{
    GardenRepository, NoteRepository, PlantRepository, PlantTypeRepository,
    RecommendationRepository, UserRepository,
};

/// Repository adapters shared by the journal services.
///
/// Every field is a trait object so the server can choose Diesel or
/// in-memory adapters at start-up.
#[derive(Clone)]
pub struct JournalRepositories {
    pub users: Arc<dyn UserRepository>,
    pub gardens: Arc<dyn GardenRepository>,
    pub plants: Arc<dyn PlantRepository>,
    pub plant_types: Arc<dyn PlantTypeRepository>,
    pub notes: Arc<dyn NoteRepository>,
    pub recommendations: Arc<dyn RecommendationRepository>,
}
