//! Table listing

use crate::Result;
use sqlx::SqlitePool;

/// Tables the dashboard queries
pub const EXPECTED_TABLES: [&str; 4] = ["employee", "employee_events", "notes", "team"];

/// List user table names
///
/// Returns names in alphabetical order, excluding SQLite internal tables.
pub async fn list_tables(pool: &SqlitePool) -> Result<Vec<String>> {
    let names = sqlx::query_scalar::<_, String>(
        r#"
        SELECT name
        FROM sqlite_master
        WHERE type = 'table'
          AND name NOT LIKE 'sqlite_%'
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(names)
}
