//! Database connection pool and migrations.

use crate::DatabaseResult;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use loresmith_error::{DatabaseError, DatabaseErrorKind};
use tracing::{info, instrument};

/// Connection pool shared by the store.
pub type DbPool = Pool<ConnectionManager<PgConnection>>;

/// Migrations compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Read the connection string from `DATABASE_URL`.
///
/// # Errors
///
/// Returns a connection error if the variable is not set.
pub fn database_url_from_env() -> DatabaseResult<String> {
    std::env::var("DATABASE_URL").map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::Connection(
            "DATABASE_URL environment variable not set".to_string(),
        ))
    })
}

/// Build an r2d2 pool for `database_url` with at most `max_size` connections.
///
/// # Errors
///
/// Returns an error if no connection can be established.
#[instrument(skip(database_url))]
pub fn create_pool(database_url: &str, max_size: u32) -> DatabaseResult<DbPool> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Pool::builder()
        .max_size(max_size)
        .build(manager)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Connection(e.to_string())))
}

/// Apply any migrations that have not yet run.
///
/// Returns the number of migrations applied.
#[instrument(skip(pool))]
pub fn run_migrations(pool: &DbPool) -> DatabaseResult<usize> {
    let mut pooled = pool.get()?;
    let conn: &mut PgConnection = &mut pooled;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Migration(e.to_string())))?;
    info!(count = applied.len(), "Applied pending migrations");
    Ok(applied.len())
}
