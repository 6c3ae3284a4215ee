//! Garden journal server entry point.

mod server;

use actix_web::web;
use color_eyre::eyre::{Result, WrapErr};
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use garden_journal::inbound::http::health::HealthState;
use garden_journal::inbound::http::session_config::{BuildMode, session_settings_from_env};
use garden_journal::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{ServerConfig, ServerSettings, create_server};

#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }

    let settings = ServerSettings::load().wrap_err("failed to load server settings")?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::current())
        .wrap_err("invalid session configuration")?;
    let bind_addr = settings.bind_addr()?;

    let mut config = ServerConfig::new(
        session.key,
        session.cookie_secure,
        session.same_site,
        bind_addr,
    )
    .with_bcrypt_cost(settings.bcrypt_cost()?);

    if let Some(database_url) = settings.database_url.as_deref() {
        if settings.run_migrations() {
            let applied = run_pending_migrations(database_url)
                .await
                .wrap_err("failed to apply migrations")?;
            info!(count = applied.len(), "migrations applied");
        }
        let pool = DbPool::new(
            PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
        )
        .await
        .wrap_err("failed to create database pool")?;
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    info!(%bind_addr, "starting garden journal");
    create_server(health_state, config)?.await?;
    Ok(())
}
