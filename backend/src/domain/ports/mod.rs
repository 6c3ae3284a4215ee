//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`, [`PasswordHasher`], [`RecommendationSource`])
//! are implemented by outbound adapters. Driving ports (`*Command`, `*Query`,
//! [`LoginService`], [`RegistrationService`]) are implemented by domain
//! services and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod garden_command;
mod garden_query;
mod garden_repository;
mod journal_command;
mod login_service;
mod note_repository;
mod password_hasher;
mod plant_command;
mod plant_query;
mod plant_repository;
mod plant_type_command;
mod plant_type_query;
mod plant_type_repository;
mod recommendation_repository;
mod recommendation_source;
mod registration_service;
mod repositories;
mod user_repository;
mod users_query;

#[cfg(test)]
pub use garden_command::MockGardenCommand;
pub use garden_command::GardenCommand;
#[cfg(test)]
pub use garden_query::MockGardenQuery;
pub use garden_query::{Dashboard, GardenDetail, GardenQuery, GardenView, PlantSelection};
#[cfg(test)]
pub use garden_repository::MockGardenRepository;
pub use garden_repository::{GardenRepository, GardenRepositoryError};
#[cfg(test)]
pub use journal_command::MockJournalCommand;
pub use journal_command::{JournalCommand, JournalOutcome};
#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{INVALID_CREDENTIALS, LoginService};
#[cfg(test)]
pub use note_repository::MockNoteRepository;
pub use note_repository::{NoteRepository, NoteRepositoryError};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHashError, PasswordHasher};
#[cfg(test)]
pub use plant_command::MockPlantCommand;
pub use plant_command::PlantCommand;
#[cfg(test)]
pub use plant_query::MockPlantQuery;
pub use plant_query::{PlantQuery, PlantRecommendations, PlantView};
#[cfg(test)]
pub use plant_repository::MockPlantRepository;
pub use plant_repository::{PlantRepository, PlantRepositoryError};
#[cfg(test)]
pub use plant_type_command::MockPlantTypeCommand;
pub use plant_type_command::PlantTypeCommand;
#[cfg(test)]
pub use plant_type_query::MockPlantTypeQuery;
pub use plant_type_query::PlantTypeQuery;
#[cfg(test)]
pub use plant_type_repository::MockPlantTypeRepository;
pub use plant_type_repository::{PlantTypeRepository, PlantTypeRepositoryError};
#[cfg(test)]
pub use recommendation_repository::MockRecommendationRepository;
pub use recommendation_repository::{RecommendationRepository, RecommendationRepositoryError};
#[cfg(test)]
pub use recommendation_source::MockRecommendationSource;
pub use recommendation_source::{RecommendationSource, RecommendationSourceError};
#[cfg(test)]
pub use registration_service::MockRegistrationService;
pub use registration_service::RegistrationService;
pub use repositories::JournalRepositories;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
