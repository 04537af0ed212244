//! Database access layer
//!
//! The dashboard only ever reads; all serving connections are opened read-only.
//! Schema creation in [`init`] exists for fixtures and first-run bootstrap.

use crate::{Error, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::{debug, warn};

mod entity;
pub mod init;
mod tables;

pub use entity::{EntityKind, EntityName, EntityQueries, EventCount, ModelFeatures, Note};
pub use init::init_database;
pub use tables::{list_tables, EXPECTED_TABLES};

/// Connect to the events database in read-only mode
pub async fn connect_readonly(db_path: &Path) -> Result<SqlitePool> {
    if !db_path.exists() {
        return Err(Error::Config(format!(
            "Database not found: {}\nRun with --init-db to create an empty one.",
            db_path.display()
        )));
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .read_only(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(4)
        .connect_with(options)
        .await?;

    // Verify read-only by attempting a write (should fail)
    #[cfg(debug_assertions)]
    {
        let write_test = sqlx::query("CREATE TABLE _test_write (id INTEGER)")
            .execute(&pool)
            .await;
        if write_test.is_ok() {
            return Err(Error::Config(
                "database connection is not read-only".to_string(),
            ));
        }
    }

    Ok(pool)
}

/// Execute a SQL string and return every row
pub async fn query(pool: &SqlitePool, sql: &str) -> Result<Vec<SqliteRow>> {
    debug!(sql = sql.trim(), "executing query");
    Ok(sqlx::query(sql).fetch_all(pool).await?)
}

/// Log a warning for each table the dashboard reads that is absent
pub async fn verify_schema(pool: &SqlitePool) -> Result<Vec<&'static str>> {
    let tables = list_tables(pool).await?;
    let missing: Vec<&'static str> = EXPECTED_TABLES
        .iter()
        .copied()
        .filter(|expected| !tables.iter().any(|name| name == expected))
        .collect();

    for name in &missing {
        warn!("Expected table missing from database: {}", name);
    }

    Ok(missing)
}
