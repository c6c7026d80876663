// src/test_support.rs
//
// Shared fixtures for unit tests: a file-backed library database in a
// temporary directory, schema already applied.

use std::sync::Arc;

use tempfile::TempDir;

use crate::config::LibraryConfig;
use crate::db::{create_connection_pool, initialize_database, ConnectionPool};

/// Keep the returned `TempDir` alive for as long as the pool is used.
pub fn test_pool() -> (TempDir, Arc<ConnectionPool>) {
    let dir = TempDir::new().expect("create temp dir");
    let config = LibraryConfig::with_data_dir(dir.path());
    let pool = create_connection_pool(&config).expect("create pool");
    {
        let conn = pool.get().expect("get connection");
        initialize_database(&conn).expect("initialize schema");
    }
    (dir, Arc::new(pool))
}
