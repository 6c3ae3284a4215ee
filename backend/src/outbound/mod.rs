//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **memory**: in-process repositories used without a database
//! - **security**: bcrypt password digests
//! - **advisor**: the recommendation source
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod advisor;
pub mod memory;
pub mod persistence;
pub mod security;
