//! Shared test doubles and fixtures for unit tests inside the crate.

pub mod clock;
pub mod fixtures;
pub mod repositories;

/// Cheapest bcrypt work factor; keeps hashing fast in tests.
pub const TEST_BCRYPT_COST: u32 = 4;

pub use clock::MutableClock;
pub use fixtures::{sample_garden, sample_plant, sample_user};
pub use repositories::RepositoryMocks;
