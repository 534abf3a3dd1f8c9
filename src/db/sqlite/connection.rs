//! SQLite connection pool and migration management.

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::{debug, info};

use super::helpers::map_sqlx_error;
use super::{SqliteCategoryRepository, SqliteQuestionRepository};
use crate::db::{Database, DbError, DbResult};

// Embed migrations from data/sql/sqlite/ at compile time
static MIGRATOR: Migrator = sqlx::migrate!("./data/sql/sqlite");

const SEED_CATEGORIES: &str = include_str!("../../../data/sql/seed/categories.sql");

/// Kept low: SQLite serializes writers anyway.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// SQLite database implementation.
///
/// Provides access to repositories via associated types, avoiding dynamic dispatch.
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open (creating if needed) a database file at the given path.
    pub async fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(DEFAULT_MAX_CONNECTIONS)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        debug!(path = %path.as_ref().display(), "opened sqlite database");
        Ok(Self { pool })
    }

    /// Create an in-memory database (useful for testing).
    ///
    /// Every pooled connection to `:memory:` would get its own empty
    /// database, so the pool is pinned to a single connection that never
    /// expires.
    pub async fn in_memory() -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await
            .map_err(|e| DbError::Connection {
                message: e.to_string(),
            })?;

        Ok(Self { pool })
    }

    /// Insert the default categories. Existing rows are left untouched.
    pub async fn seed(&self) -> DbResult<()> {
        let result = sqlx::query(SEED_CATEGORIES)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        info!(inserted = result.rows_affected(), "seeded default categories");
        Ok(())
    }

    /// Direct access to the pool for tests and maintenance.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl Database for SqliteDatabase {
    type Questions<'a> = SqliteQuestionRepository<'a>;
    type Categories<'a> = SqliteCategoryRepository<'a>;

    async fn migrate(&self) -> DbResult<()> {
        MIGRATOR
            .run(&self.pool)
            .await
            .map_err(|e| DbError::Migration {
                message: e.to_string(),
            })?;

        Ok(())
    }

    fn questions(&self) -> Self::Questions<'_> {
        SqliteQuestionRepository { pool: &self.pool }
    }

    fn categories(&self) -> Self::Categories<'_> {
        SqliteCategoryRepository { pool: &self.pool }
    }
}
