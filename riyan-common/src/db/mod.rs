//! Database access layer
//!
//! All queries are read-only and parameterized. The pool is created once at
//! startup and passed into every query function as `&MySqlPool`.

use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::Result;

pub mod careers;
pub mod diagnostics;
pub mod hero;
pub mod logos;
pub mod menu;
pub mod models;
pub mod news;
pub mod posts;
pub mod projects;
pub mod taxonomy;

mod helpers;

pub use helpers::ListingFilter;
pub use models::*;

/// Time to wait for a free connection before a query fails
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

fn connect_options(config: &DatabaseConfig) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
        .charset("utf8mb4")
}

fn pool_options(config: &DatabaseConfig) -> MySqlPoolOptions {
    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
}

/// Connect to the content database
///
/// Fails when the server cannot be reached; the caller owns the pool.
pub async fn connect(config: &DatabaseConfig) -> Result<MySqlPool> {
    info!(
        "Connecting to MySQL at {}:{}/{} as {}",
        config.host, config.port, config.name, config.user
    );

    let pool = pool_options(config)
        .connect_with(connect_options(config))
        .await?;

    Ok(pool)
}

/// Create a pool without opening a connection
///
/// Connections are established on first use, so requests fail (rather than
/// startup) when the database is unreachable.
pub fn connect_lazy(config: &DatabaseConfig) -> MySqlPool {
    pool_options(config).connect_lazy_with(connect_options(config))
}
