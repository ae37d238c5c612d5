//! Persistence layer: SQLite pool, embedded migrations, models and
//! repositories for users, projects, weekly statuses and the value ledger.

use std::str::FromStr;
use std::time::Duration;

use alliswell_core::types::Timestamp;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a connection pool from a database URL.
///
/// The database file is created if missing. Foreign keys are enforced on
/// every connection and the journal runs in WAL mode so readers do not
/// block the single writer.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Create a single-connection in-memory pool.
///
/// Each in-memory SQLite connection is its own database, so the pool is
/// pinned to one connection that is never recycled.
pub async fn create_memory_pool() -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::debug!("Migrations up to date");
    Ok(())
}

/// Render a timestamp the way the schema's `strftime('%Y-%m-%dT%H:%M:%fZ')`
/// defaults do.
///
/// Every stored timestamp has this fixed width, so comparing the TEXT
/// columns orders them chronologically.
pub fn sql_timestamp(ts: Timestamp) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}
