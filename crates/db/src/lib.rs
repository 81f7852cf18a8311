use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod error;
pub mod models;
pub mod repositories;
pub mod resource;

pub type DbPool = sqlx::SqlitePool;

/// Drop-if-exists + create for every table.
const SCHEMA_SQL: &str = include_str!("../sql/schema.sql");

/// Literal seed rows loaded after the schema is recreated.
const SEED_SQL: &str = include_str!("../sql/seed.sql");

/// Every table the schema creates.
pub const TABLES: [&str; 7] = [
    "buildings",
    "departments",
    "employees",
    "login_credentials",
    "parking_spots",
    "ev_bookings",
    "waitlist_entries",
];

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a connection pool for a file-backed SQLite database, creating the
/// file if it does not exist yet.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(BUSY_TIMEOUT);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Round-trip a trivial query to prove the store is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Whether every table of the schema exists.
pub async fn is_initialized(pool: &DbPool) -> Result<bool, sqlx::Error> {
    let existing: Vec<String> =
        sqlx::query_scalar("SELECT name FROM sqlite_master WHERE type = 'table'")
            .fetch_all(pool)
            .await?;
    Ok(TABLES
        .iter()
        .all(|table| existing.iter().any(|name| name == table)))
}

/// Drop and recreate every table. Existing data is lost.
pub async fn reset_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::raw_sql(SCHEMA_SQL).execute(&mut *tx).await?;
    tx.commit().await
}

/// Insert the seed rows. Expects freshly created, empty tables.
pub async fn seed(pool: &DbPool) -> Result<(), sqlx::Error> {
    let mut tx = pool.begin().await?;
    sqlx::raw_sql(SEED_SQL).execute(&mut *tx).await?;
    tx.commit().await
}

/// Recreate and seed the schema when it is missing or when `force_reset` is set.
///
/// Returns `true` if the schema was (re)built.
pub async fn bootstrap(pool: &DbPool, force_reset: bool) -> Result<bool, sqlx::Error> {
    if !force_reset && is_initialized(pool).await? {
        tracing::debug!("Schema already present, skipping bootstrap");
        return Ok(false);
    }

    reset_schema(pool).await?;
    seed(pool).await?;
    tracing::info!(force_reset, "Schema created and seeded");
    Ok(true)
}
