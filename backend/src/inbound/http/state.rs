//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use mockable::Clock;

use crate::domain::ports::{
    GardenCommand, GardenQuery, JournalCommand, JournalRepositories, LoginService,
    PasswordHasher, PlantCommand, PlantQuery, PlantTypeCommand, PlantTypeQuery,
    RecommendationSource, RegistrationService, UsersQuery,
};
use crate::domain::{
    AccountService, GardenService, JournalService, PlantService, PlantTypeService,
};

/// Outbound adapters the journal services are assembled from.
#[derive(Clone)]
pub struct JournalAdapters {
    pub repositories: JournalRepositories,
    pub hasher: Arc<dyn PasswordHasher>,
    pub advisor: Arc<dyn RecommendationSource>,
    pub clock: Arc<dyn Clock>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub login: Arc<dyn LoginService>,
    pub registration: Arc<dyn RegistrationService>,
    pub users: Arc<dyn UsersQuery>,
    pub gardens: Arc<dyn GardenCommand>,
    pub gardens_query: Arc<dyn GardenQuery>,
    pub journal: Arc<dyn JournalCommand>,
    pub plants: Arc<dyn PlantCommand>,
    pub plants_query: Arc<dyn PlantQuery>,
    pub plant_types: Arc<dyn PlantTypeCommand>,
    pub plant_types_query: Arc<dyn PlantTypeQuery>,
}

impl HttpState {
    /// Wire every driving port to the domain services over `adapters`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use garden_journal::inbound::http::state::{HttpState, JournalAdapters};
    /// use garden_journal::outbound::advisor::PlaceholderAdvisor;
    /// use garden_journal::outbound::memory::MemoryStore;
    /// use garden_journal::outbound::security::BcryptPasswordHasher;
    /// use mockable::DefaultClock;
    ///
    /// let state = HttpState::from_adapters(JournalAdapters {
    ///     repositories: MemoryStore::new().repositories(),
    ///     hasher: Arc::new(BcryptPasswordHasher::default()),
    ///     advisor: Arc::new(PlaceholderAdvisor),
    ///     clock: Arc::new(DefaultClock),
    /// });
    /// let _gardens = state.gardens.clone();
    /// ```
    pub fn from_adapters(adapters: JournalAdapters) -> Self {
        let JournalAdapters {
            repositories,
            hasher,
            advisor,
            clock,
        } = adapters;

        let accounts = Arc::new(AccountService::new(repositories.users.clone(), hasher));
        let gardens = Arc::new(GardenService::new(repositories.clone()));
        let plants = Arc::new(PlantService::new(repositories.clone(), clock.clone()));
        let journal = Arc::new(JournalService::new(repositories.clone(), advisor, clock));
        let plant_types = Arc::new(PlantTypeService::new(repositories.plant_types.clone()));

        Self {
            login: accounts.clone(),
            registration: accounts.clone(),
            users: accounts,
            gardens: gardens.clone(),
            gardens_query: gardens,
            journal,
            plants: plants.clone(),
            plants_query: plants,
            plant_types: plant_types.clone(),
            plant_types_query: plant_types,
        }
    }
}
