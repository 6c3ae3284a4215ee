//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the journal repository ports backed by
//! PostgreSQL via Diesel, with async support through `diesel-async` and `bb8`
//! connection pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types. Permission checks and validation live in the domain.
//! - **Internal models**: `models.rs` and `schema.rs` never leave this module.
//! - **Cascades in SQL**: foreign keys carry the delete rules, so a single
//!   `DELETE` statement removes dependent rows atomically.
//!
//! # Example
//!
//! ```ignore
//! use garden_journal::outbound::persistence::{DbPool, PoolConfig, diesel_repositories};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/journal")).await?;
//! let repos = diesel_repositories(&pool);
//! ```

use std::sync::Arc;

use crate::domain::ports::JournalRepositories;

mod diesel_basic_error_mapping;
mod diesel_garden_repository;
mod diesel_note_repository;
mod diesel_plant_repository;
mod diesel_plant_type_repository;
mod diesel_recommendation_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_garden_repository::DieselGardenRepository;
pub use diesel_note_repository::DieselNoteRepository;
pub use diesel_plant_repository::DieselPlantRepository;
pub use diesel_plant_type_repository::DieselPlantTypeRepository;
pub use diesel_recommendation_repository::DieselRecommendationRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};

/// Bundle every Diesel repository over one shared pool.
pub fn diesel_repositories(pool: &DbPool) -> JournalRepositories {
    JournalRepositories {
        users: Arc::new(DieselUserRepository::new(pool.clone())),
        gardens: Arc::new(DieselGardenRepository::new(pool.clone())),
        plants: Arc::new(DieselPlantRepository::new(pool.clone())),
        plant_types: Arc::new(DieselPlantTypeRepository::new(pool.clone())),
        notes: Arc::new(DieselNoteRepository::new(pool.clone())),
        recommendations: Arc::new(DieselRecommendationRepository::new(pool.clone())),
    }
}
