//! Process settings and the assembled server configuration.

use std::net::SocketAddr;

use actix_web::cookie::{Key, SameSite};
use ortho_config::OrthoConfig;
use serde::Deserialize;

use garden_journal::outbound::persistence::DbPool;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
/// Work factors bcrypt accepts.
const BCRYPT_COSTS: std::ops::RangeInclusive<u32> = 4..=31;

/// Settings read from `GARDEN_*` environment variables, config files and
/// command-line flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "GARDEN")]
pub struct ServerSettings {
    /// Listen address, `host:port`.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Without it the journal lives in memory.
    pub database_url: Option<String>,
    /// Upper bound of pooled database connections.
    pub db_max_connections: Option<u32>,
    /// bcrypt work factor for new password digests.
    pub bcrypt_cost: Option<u32>,
    /// Apply pending migrations before serving; on unless set to false.
    pub run_migrations: Option<bool>,
}

impl ServerSettings {
    /// Parsed listen address.
    pub fn bind_addr(&self) -> std::io::Result<SocketAddr> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|error| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("invalid GARDEN_BIND_ADDR {raw:?}: {error}"),
            )
        })
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Configured bcrypt cost, or the crate default.
    ///
    /// Fails for work factors bcrypt would refuse, so a bad value stops
    /// startup instead of failing every login.
    pub fn bcrypt_cost(&self) -> std::io::Result<u32> {
        let cost = self.bcrypt_cost.unwrap_or(bcrypt::DEFAULT_COST);
        if BCRYPT_COSTS.contains(&cost) {
            Ok(cost)
        } else {
            Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!(
                    "invalid GARDEN_BCRYPT_COST {cost}: expected {}..={}",
                    BCRYPT_COSTS.start(),
                    BCRYPT_COSTS.end()
                ),
            ))
        }
    }

    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }
}

/// Everything `create_server` needs, resolved at startup.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) bcrypt_cost: u32,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(key: Key, cookie_secure: bool, same_site: SameSite, bind_addr: SocketAddr) -> Self {
        Self {
            key,
            cookie_secure,
            same_site,
            bind_addr,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            db_pool: None,
        }
    }

    /// Store the journal in PostgreSQL instead of memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    #[must_use]
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }
}
