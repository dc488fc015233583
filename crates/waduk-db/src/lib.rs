//! # Waduk DB
//!
//! PostgreSQL connection pool built from the `DB_*` settings.
//!
//! A failed connection is reported to the caller and never retried; the
//! server treats it as fatal at startup.
//!
//! # Example
//!
//! ```ignore
//! use waduk_config::DatabaseConfig;
//! use waduk_db::init_db_pool;
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! ```

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use thiserror::Error;
use waduk_config::{ConfigError, DatabaseConfig, Driver};

pub use sqlx::PgPool;

const MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("invalid database configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("failed to connect to database: {0}")]
    Connect(#[from] sqlx::Error),
}

/// Connection options for the configured server.
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, ConfigError> {
    match config.validate()? {
        Driver::Postgres => {
            let mut options = PgConnectOptions::new()
                .host(&config.host)
                .port(config.port()?)
                .database(&config.database);
            if !config.username.is_empty() {
                options = options.username(&config.username);
            }
            if !config.password.is_empty() {
                options = options.password(&config.password);
            }
            Ok(options)
        }
    }
}

/// Opens the pool and checks that one connection can be established.
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, DbError> {
    let options = connect_options(config)?;
    tracing::info!(dsn = %config.redacted_dsn()?, "Connecting to database");

    let pool = PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect_with(options)
        .await?;

    Ok(pool)
}
