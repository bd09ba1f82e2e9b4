//! Connection pool construction for the SQLite store.

use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::sqlite::SqliteConnection;

/// Shared r2d2 pool of SQLite connections.
pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
/// Connection checked out from [`DbPool`].
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// Pragmas applied to every connection handed out by the pool.
///
/// SQLite ships with foreign key enforcement disabled; the `ON DELETE` policies
/// declared in the migrations only take effect once it is switched on.
#[derive(Debug, Clone, Copy)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(
            "PRAGMA journal_mode = WAL; PRAGMA busy_timeout = 5000; PRAGMA foreign_keys = ON;",
        )
        .map_err(r2d2::Error::QueryError)
    }
}

/// Build a pool for `database_url` using the default pool size.
pub fn establish_connection_pool(database_url: &str) -> Result<DbPool, r2d2::PoolError> {
    build_pool(database_url, None)
}

/// Build a pool for `database_url` holding at most `max_size` connections.
pub fn establish_connection_pool_with_size(
    database_url: &str,
    max_size: u32,
) -> Result<DbPool, r2d2::PoolError> {
    build_pool(database_url, Some(max_size))
}

fn build_pool(database_url: &str, max_size: Option<u32>) -> Result<DbPool, r2d2::PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let mut builder = Pool::builder().connection_customizer(Box::new(SqlitePragmas));

    if let Some(max_size) = max_size {
        builder = builder.max_size(max_size);
    }

    builder.build(manager)
}
