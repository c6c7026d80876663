// src/db/connection.rs
//
// Database connection management
//
// PRINCIPLES:
// - Explicit connection pooling
// - No hidden connection creation
// - Clear error propagation

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;

use crate::config::LibraryConfig;
use crate::error::{AppError, AppResult};

/// Type alias for connection pool
pub type ConnectionPool = Pool<SqliteConnectionManager>;

/// Type alias for a pooled connection
pub type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Create a connection pool for the library database.
///
/// Every pooled connection gets:
/// - foreign keys enabled (genre/screenshot cascades depend on it)
/// - WAL journal
/// - a busy timeout so a concurrent reader does not fail immediately
/// - the `fold` text function used by free-text search
pub fn create_connection_pool(config: &LibraryConfig) -> AppResult<ConnectionPool> {
    config.ensure_dirs()?;
    let db_path = config.database_path();
    let busy_timeout_ms = config.busy_timeout_ms;

    let manager = SqliteConnectionManager::file(&db_path).with_init(move |conn| {
        conn.execute_batch(&format!(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA synchronous = NORMAL;
             PRAGMA busy_timeout = {};",
            busy_timeout_ms
        ))?;
        register_functions(conn)
    });

    let pool = Pool::builder()
        .max_size(config.max_pool_size)
        .build(manager)
        .map_err(|e| AppError::Pool(format!("Failed to create connection pool: {}", e)))?;

    log::debug!("opened library database at {}", db_path.display());
    Ok(pool)
}

/// Get a connection from the pool
pub fn get_connection(pool: &ConnectionPool) -> AppResult<PooledConn> {
    pool.get()
        .map_err(|e| AppError::Pool(format!("Failed to get database connection: {}", e)))
}

/// Create a standalone in-memory connection (for schema tests)
pub fn create_test_connection() -> AppResult<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    register_functions(&conn)?;
    Ok(conn)
}

/// Register `fold(text)`: Unicode lower-casing, NULL in gives NULL out.
/// SQLite's own `lower()` and `LIKE` only fold ASCII.
pub fn register_functions(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "fold",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|t| t.to_lowercase()))
        },
    )
}
