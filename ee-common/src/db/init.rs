//! Database initialization
//!
//! Creates the events schema when it is missing. The dashboard never calls
//! this while serving; it backs `--init-db` and test fixtures.

use crate::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

/// Open (creating if needed) a writable database and ensure all tables exist
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(true)
        // Rollback journal keeps the file openable by read-only connections
        .journal_mode(SqliteJournalMode::Delete);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Idempotent - safe to call multiple times
    create_team_table(&pool).await?;
    create_employee_table(&pool).await?;
    create_employee_events_table(&pool).await?;
    create_notes_table(&pool).await?;

    Ok(pool)
}

async fn create_team_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS team (
            team_id INTEGER PRIMARY KEY,
            team_name TEXT,
            shift TEXT,
            manager_name TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_employee_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employee (
            employee_id INTEGER PRIMARY KEY,
            first_name TEXT,
            last_name TEXT,
            team_id INTEGER REFERENCES team(team_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_employee_events_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS employee_events (
            event_date TEXT NOT NULL,
            employee_id INTEGER REFERENCES employee(employee_id),
            team_id INTEGER REFERENCES team(team_id),
            positive_events INTEGER,
            negative_events INTEGER
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_employee_events_employee ON employee_events(employee_id)",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_employee_events_team ON employee_events(team_id)")
        .execute(pool)
        .await?;

    Ok(())
}

async fn create_notes_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS notes (
            employee_id INTEGER REFERENCES employee(employee_id),
            team_id INTEGER REFERENCES team(team_id),
            note TEXT,
            note_date TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_init_creates_expected_tables() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("events.db");

        let pool = init_database(&db_path).await.unwrap();
        assert!(db_path.exists(), "Database file was not created");

        let tables = crate::db::list_tables(&pool).await.unwrap();
        for expected in crate::db::EXPECTED_TABLES {
            assert!(
                tables.iter().any(|name| name == expected),
                "Should have table: {}",
                expected
            );
        }
    }

    #[tokio::test]
    async fn test_init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("events.db");

        let first = init_database(&db_path).await.unwrap();
        sqlx::query("INSERT INTO team (team_id, team_name) VALUES (1, 'Alpha')")
            .execute(&first)
            .await
            .unwrap();
        first.close().await;

        let second = init_database(&db_path).await.unwrap();
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM team")
            .fetch_one(&second)
            .await
            .unwrap();
        assert_eq!(count, 1, "Existing rows must survive re-initialization");
    }
}
