//! `PostgreSQL` connection pool setup.

use std::str::FromStr;

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

use crate::error::StorageError;

/// Connection parameters for the `PostgreSQL` storage adapter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database user.
    pub user: String,
    /// Database password.
    pub password: String,
    /// Database name.
    pub name: String,
    /// Database host.
    pub host: String,
    /// Database port.
    pub port: u16,
    /// SSL mode (`disable`, `prefer`, `require`, …).
    pub ssl_mode: String,
}

impl Config {
    /// Translate into sqlx connect options.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when `ssl_mode` is not a recognised mode.
    pub fn connect_options(&self) -> Result<PgConnectOptions, StorageError> {
        let ssl_mode = PgSslMode::from_str(&self.ssl_mode)?;
        Ok(PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(ssl_mode))
    }

    /// Build a [`Database`] from this configuration.
    ///
    /// The pool is connected eagerly so that a bad configuration fails at
    /// startup rather than on the first request.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection fails.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::initialize(&self).await
    }
}

/// Holds the `PostgreSQL` connection pool and provides access to it.
pub struct Database {
    pool: PgPool,
}

impl Database {
    async fn initialize(config: &Config) -> Result<Self, StorageError> {
        let options = config.connect_options()?;

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Close all pool connections, waiting for them to be released.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
