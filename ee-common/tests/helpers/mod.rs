//! Shared fixture database for ee-common integration tests
//!
//! Fixture layout:
//! - team 1 "Alpha": employees 1 (Ada Lovelace) and 2 (Alan Turing)
//! - team 2 "Beta": employees 3 (Grace Hopper) and 4 (Linus Pauling, no events)
//! - employee 1 has two event rows on 2023-01-01 so grouping is exercised
//! - employee 3 has a NULL positive count

#![allow(dead_code)]

use ee_common::db::init_database;
use sqlx::SqlitePool;
use std::path::Path;

/// Create the schema at `db_path` and load the fixture rows
pub async fn seed_fixture_database(db_path: &Path) -> SqlitePool {
    let pool = init_database(db_path)
        .await
        .expect("Should initialize fixture database");

    let statements = [
        "INSERT INTO team (team_id, team_name, shift, manager_name) VALUES
            (1, 'Alpha', 'Day', 'Mara Quinn'),
            (2, 'Beta', 'Night', 'Otto Reyes')",
        "INSERT INTO employee (employee_id, first_name, last_name, team_id) VALUES
            (1, 'Ada', 'Lovelace', 1),
            (2, 'Alan', 'Turing', 1),
            (3, 'Grace', 'Hopper', 2),
            (4, 'Linus', 'Pauling', 2)",
        "INSERT INTO employee_events (event_date, employee_id, team_id, positive_events, negative_events) VALUES
            ('2023-01-01', 1, 1, 3, 1),
            ('2023-01-01', 1, 1, 2, 0),
            ('2023-01-02', 1, 1, 1, 2),
            ('2023-01-03', 1, 1, 2, 1),
            ('2023-01-01', 2, 1, 4, 0),
            ('2023-01-03', 2, 1, 0, 3),
            ('2023-01-02', 3, 2, NULL, 5)",
        "INSERT INTO notes (employee_id, team_id, note, note_date) VALUES
            (1, 1, 'Strong sprint', '2023-01-02'),
            (1, 1, 'Missed standup', '2023-01-01'),
            (2, 1, 'Mentoring new hire', '2023-01-03'),
            (3, 2, 'Quiet week', '2023-01-02')",
    ];

    for sql in statements {
        sqlx::query(sql)
            .execute(&pool)
            .await
            .expect("Should insert fixture rows");
    }

    pool
}
