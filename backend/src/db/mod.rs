//! Postgres connection setup for the user store
//!
//! Pool sizing and timeouts come straight from the `database` section of
//! [`AppConfig`](crate::config::AppConfig), so every knob can be set with
//! `UDAGRAM__DATABASE__*`.

use crate::config::DatabaseConfig;
use anyhow::{Context, Result};
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{info, warn};

/// Reported to Postgres so sessions show up by name in `pg_stat_activity`
const APPLICATION_NAME: &str = "udagram-api";

fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions> {
    let options = PgConnectOptions::from_str(&config.url)
        .context("database.url is not a valid Postgres connection string")?;
    Ok(options.application_name(APPLICATION_NAME))
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .idle_timeout(config.idle_timeout_secs.map(Duration::from_secs))
        .max_lifetime(config.max_lifetime_secs.map(Duration::from_secs))
}

/// Open the user store pool
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = pool_options(config)
        .connect_with(connect_options(config)?)
        .await
        .context("failed to connect to the user database")?;

    info!(
        max = config.max_connections,
        min = config.min_connections,
        "user store pool ready"
    );
    Ok(pool)
}

/// Create the `users` table if it does not exist yet
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database migrations completed successfully");
    Ok(())
}

/// Round-trip a trivial query
pub async fn health_check(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ()).map_err(|e| {
        warn!(error = %e, "user store ping failed");
        e
    })
}
