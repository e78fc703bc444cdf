//! PostgreSQL-backed document store.

use crate::{DatabaseResult, DbPool};
use diesel::pg::PgConnection;
use loresmith_error::{DatabaseError, DatabaseErrorKind};

/// Document store implementing every repository trait over a connection pool.
///
/// Diesel is synchronous, so each operation checks out a pooled connection
/// and runs on the blocking thread pool.
///
/// # Example
///
/// ```rust,ignore
/// use loresmith_database::{LoreStore, create_pool, database_url_from_env};
/// use loresmith_interface::PromptRepository;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = create_pool(&database_url_from_env()?, 8)?;
/// let store = LoreStore::new(pool);
/// let active = store.active_prompt("backstory").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct LoreStore {
    pool: DbPool,
}

impl LoreStore {
    /// Create a store over an existing pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// The underlying pool.
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Run `op` with a pooled connection on the blocking thread pool.
    pub(crate) async fn run<T, F>(&self, op: F) -> DatabaseResult<T>
    where
        F: FnOnce(&mut PgConnection) -> DatabaseResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            op(&mut *conn)
        })
        .await
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Query(e.to_string())))?
    }
}

/// Error for an update that matched no row.
#[track_caller]
pub(crate) fn not_found(what: &str, id: uuid::Uuid) -> DatabaseError {
    DatabaseError::new(DatabaseErrorKind::NotFound(format!("{what} {id}")))
}
