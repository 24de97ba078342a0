//! Unit and API tests for the users backend.
//!
//! ## Test Modules
//!
//! - **api_tests**: the four User routes through the full router
//! - **store_tests**: `SqliteUserStore` against a throwaway database
//! - **schema_tests**: record constraints and their messages
//! - **types_tests**: DTO (de)serialization
//! - **error_tests**: error display and the `"Error! "` response envelope
//! - **config_tests**: configuration loading and validation
//! - **db_tests**: pool bootstrap and schema initialization
//! - **health_api_tests**: liveness, readiness and version endpoints
//!
//! Every test that needs a database gets its own SQLite file in a temporary
//! directory, so tests can run in parallel.


use std::sync::Arc;

use sqlx::SqlitePool;
use tempfile::TempDir;

use crate::config::{AppConfig, DatabaseConfig};
use crate::state::AppState;
use crate::store::SqliteUserStore;

/// A migrated database that lives as long as this value.
pub(crate) struct TestDb {
    pub pool: SqlitePool,
    _dir: TempDir,
}

pub(crate) async fn test_db() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let cfg = DatabaseConfig {
        url: format!("sqlite://{}", dir.path().join("users.db").display()),
        max_connections: 1,
    };
    let pool = crate::db::connect(&cfg).await.unwrap();
    crate::db::init_db(&pool).await.unwrap();
    TestDb { pool, _dir: dir }
}

pub(crate) async fn test_app() -> (axum::Router, TestDb) {
    let db = test_db().await;
    let store = SqliteUserStore::new(db.pool.clone());
    let state = AppState::new(Arc::new(store), AppConfig::default());
    (crate::routes::router(state), db)
}
