//! One mock per driven repository port, bundled for service construction.

use std::sync::Arc;

use crate::domain::ports::{
    JournalRepositories, MockGardenRepository, MockNoteRepository, MockPlantRepository,
    MockPlantTypeRepository, MockRecommendationRepository, MockUserRepository,
};

/// Unconfigured mocks; any call without an expectation fails the test.
#[derive(Default)]
pub struct RepositoryMocks {
    pub users: MockUserRepository,
    pub gardens: MockGardenRepository,
    pub plants: MockPlantRepository,
    pub plant_types: MockPlantTypeRepository,
    pub notes: MockNoteRepository,
    pub recommendations: MockRecommendationRepository,
}

impl RepositoryMocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_repositories(self) -> JournalRepositories {
        JournalRepositories {
            users: Arc::new(self.users),
            gardens: Arc::new(self.gardens),
            plants: Arc::new(self.plants),
            plant_types: Arc::new(self.plant_types),
            notes: Arc::new(self.notes),
            recommendations: Arc::new(self.recommendations),
        }
    }
}
