//! Selection of the outbound adapters behind the HTTP state.

use std::sync::Arc;

use mockable::DefaultClock;
use tracing::{info, warn};

use garden_journal::inbound::http::state::{HttpState, JournalAdapters};
use garden_journal::outbound::advisor::PlaceholderAdvisor;
use garden_journal::outbound::memory::MemoryStore;
use garden_journal::outbound::persistence::diesel_repositories;
use garden_journal::outbound::security::BcryptPasswordHasher;

use super::ServerConfig;

/// Diesel repositories when a pool is configured, the memory store otherwise.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    let repositories = match &config.db_pool {
        Some(pool) => {
            info!("journal storage: postgres");
            diesel_repositories(pool)
        }
        None => {
            warn!("journal storage: in-memory; data is lost on restart");
            MemoryStore::new().repositories()
        }
    };

    HttpState::from_adapters(JournalAdapters {
        repositories,
        hasher: Arc::new(BcryptPasswordHasher::new(config.bcrypt_cost)),
        advisor: Arc::new(PlaceholderAdvisor),
        clock: Arc::new(DefaultClock),
    })
}
