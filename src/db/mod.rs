//! Database pool management.
//!
//! Builds the r2d2 SQLite pool, applies embedded migrations on startup,
//! and turns on the pragmas every connection needs (WAL for concurrent
//! readers, foreign_keys so park/trail integrity is enforced).

use std::error::Error;

use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel::{sql_query, RunQueryDsl, SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::info;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

#[derive(Debug)]
struct ConnectionOptions;

impl diesel::r2d2::CustomizeConnection<SqliteConnection, diesel::r2d2::Error>
    for ConnectionOptions
{
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        // WAL mode for better concurrent access; SQLite leaves FK checks
        // off unless asked
        sql_query("PRAGMA journal_mode = WAL;")
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;
        sql_query("PRAGMA foreign_keys = ON;")
            .execute(conn)
            .map_err(diesel::r2d2::Error::QueryError)?;
        Ok(())
    }
}

/// Build a connection pool and run pending migrations.
pub fn init_pool(database_url: &str) -> Result<DbPool, Box<dyn Error + Send + Sync>> {
    build_pool(database_url, 10)
}

/// Build a pool with an explicit size.
///
/// Tests use a single-connection pool against `:memory:` so every
/// checkout sees the same database.
pub fn build_pool(
    database_url: &str,
    max_size: u32,
) -> Result<DbPool, Box<dyn Error + Send + Sync>> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(ConnectionOptions))
        .build(manager)?;

    let mut conn = pool.get()?;
    conn.run_pending_migrations(MIGRATIONS)?;
    info!("Database migrations applied");

    Ok(pool)
}
