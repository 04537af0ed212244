//! Test helpers: fixture database and router setup
//!
//! Fixture layout:
//! - team 1 "Alpha": employees 1 (Ada Lovelace) and 2 (Alan Turing)
//! - team 2 "Beta": employee 3 (Grace Hopper)

#![allow(dead_code)]

use axum::body::Body;
use axum::http::Request;
use ee_common::{db, LogisticModel, RiskModel};
use ee_dashboard::{build_router, AppState};
use std::sync::Arc;
use tempfile::TempDir;

/// Seeded database opened read-only, as the server sees it
pub struct TestDb {
    pub dir: TempDir,
    pub pool: sqlx::SqlitePool,
}

pub async fn setup_test_db() -> TestDb {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let db_path = dir.path().join("employee_events.db");

    let writer = db::init_database(&db_path)
        .await
        .expect("Should initialize fixture database");

    let statements = [
        "INSERT INTO team (team_id, team_name, shift, manager_name) VALUES
            (1, 'Alpha', 'Day', 'Mara Quinn'),
            (2, 'Beta', 'Night', 'Otto Reyes')",
        "INSERT INTO employee (employee_id, first_name, last_name, team_id) VALUES
            (1, 'Ada', 'Lovelace', 1),
            (2, 'Alan', 'Turing', 1),
            (3, 'Grace', 'Hopper', 2)",
        "INSERT INTO employee_events (event_date, employee_id, team_id, positive_events, negative_events) VALUES
            ('2023-01-01', 1, 1, 5, 1),
            ('2023-01-02', 1, 1, 1, 2),
            ('2023-01-03', 1, 1, 2, 1),
            ('2023-01-01', 2, 1, 4, 0),
            ('2023-01-03', 2, 1, 0, 3),
            ('2023-01-02', 3, 2, 6, 5)",
        "INSERT INTO notes (employee_id, team_id, note, note_date) VALUES
            (1, 1, 'Strong sprint', '2023-01-02'),
            (1, 1, 'Missed standup', '2023-01-01'),
            (2, 1, 'Mentoring new hire', '2023-01-03'),
            (3, 2, 'Quiet week', '2023-01-02')",
    ];

    for sql in statements {
        sqlx::query(sql)
            .execute(&writer)
            .await
            .expect("Should insert fixture rows");
    }
    writer.close().await;

    let pool = db::connect_readonly(&db_path)
        .await
        .expect("Should connect to fixture database");

    TestDb { dir, pool }
}

/// Zero weights: every row scores exactly 0.5
pub fn even_odds_model() -> Arc<dyn RiskModel> {
    Arc::new(LogisticModel::new([0.0, 0.0], 0.0))
}

pub fn setup_app(db: &TestDb, model: Option<Arc<dyn RiskModel>>) -> axum::Router {
    build_router(AppState::new(db.pool.clone(), model))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_text(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    String::from_utf8(bytes.to_vec()).expect("Body should be UTF-8")
}
