//! SQLite connection pool and schema management.

use std::str::FromStr;
use std::time::Duration;

use sqlx::pool::PoolConnection;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::config::AppConfig;

/// SQLite-backed store using `sqlx::SqlitePool`.
///
/// Cheap to clone. Every operation acquires its own connection or
/// transaction from the pool and releases it when done.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Wraps an existing connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Opens the database named by `config.database_url`, creating the file
    /// if needed. Foreign keys are enforced on every connection.
    ///
    /// An in-memory URL keeps at least one connection open for the life of
    /// the pool, otherwise the database would vanish with the last idle
    /// connection.
    ///
    /// # Errors
    ///
    /// Returns a [`sqlx::Error`] if the URL is invalid or the database
    /// cannot be opened.
    pub async fn connect(config: &AppConfig) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(config.database_max_connections)
            .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs));
        if is_in_memory(&config.database_url) {
            pool_options = pool_options
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;
        Ok(Self::new(pool))
    }

    /// Opens a private in-memory database with the schema applied.
    ///
    /// The pool holds exactly one connection that never expires, since an
    /// in-memory SQLite database lives only as long as its connection.
    ///
    /// # Errors
    ///
    /// Returns a [`sqlx::Error`] if the database cannot be opened or
    /// migrated.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self::new(pool);
        store.migrate().await?;
        Ok(store)
    }

    /// Applies the embedded migrations from `migrations/`.
    ///
    /// # Errors
    ///
    /// Returns a [`sqlx::Error`] if a migration fails.
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        sqlx::migrate!().run(&self.pool).await?;
        tracing::debug!("database migrations applied");
        Ok(())
    }

    /// Acquires a pooled connection for a read-only operation.
    ///
    /// # Errors
    ///
    /// Returns a [`sqlx::Error`] if no connection becomes available.
    pub async fn acquire(&self) -> Result<PoolConnection<Sqlite>, sqlx::Error> {
        self.pool.acquire().await
    }

    /// Starts a write transaction. Dropping it without committing rolls
    /// back.
    ///
    /// The write lock is taken at `BEGIN IMMEDIATE`, so a concurrent writer
    /// waits out the busy timeout instead of failing on lock upgrade after
    /// its first read.
    ///
    /// # Errors
    ///
    /// Returns a [`sqlx::Error`] if no connection becomes available or the
    /// lock is not granted within the busy timeout.
    pub async fn begin(&self) -> Result<Transaction<'static, Sqlite>, sqlx::Error> {
        self.pool.begin_with("BEGIN IMMEDIATE").await
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::config::LogFormat;
    use crate::domain::{EntityKind, NewPizza};
    use crate::persistence::queries;

    fn config(database_url: &str) -> AppConfig {
        AppConfig {
            listen_addr: ([127, 0, 0, 1], 0).into(),
            database_url: database_url.to_string(),
            database_max_connections: 5,
            database_connect_timeout_secs: 5,
            log_format: LogFormat::Pretty,
        }
    }

    #[test]
    fn detects_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://file:shared?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://app.db"));
    }

    #[tokio::test]
    async fn in_memory_url_keeps_a_connection_alive() {
        let Ok(store) = SqliteStore::connect(&config("sqlite::memory:")).await else {
            panic!("in-memory store should open");
        };
        let options = store.pool.options();
        assert_eq!(options.get_min_connections(), 1);
        assert_eq!(options.get_idle_timeout(), None);
        assert_eq!(options.get_max_lifetime(), None);

        if store.migrate().await.is_err() {
            panic!("migrations failed");
        }
        let Ok(mut conn) = store.acquire().await else {
            panic!("connection");
        };
        if queries::insert_pizza(&mut conn, &NewPizza::new("Emma", "Dough"))
            .await
            .is_err()
        {
            panic!("insert failed");
        }
        drop(conn);

        let Ok(mut conn) = store.acquire().await else {
            panic!("connection");
        };
        assert!(matches!(
            queries::count(&mut conn, EntityKind::Pizza).await,
            Ok(1)
        ));
    }

    #[tokio::test]
    async fn file_url_uses_default_pool_lifetimes() {
        let Ok(dir) = tempfile::tempdir() else {
            panic!("temp dir");
        };
        let url = format!("sqlite://{}", dir.path().join("store.db").display());
        let Ok(store) = SqliteStore::connect(&config(&url)).await else {
            panic!("file store should open");
        };
        assert_eq!(store.pool.options().get_min_connections(), 0);
        assert!(dir.path().join("store.db").exists());
    }
}
