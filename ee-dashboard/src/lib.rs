//! ee-dashboard library - Employee events report service
//!
//! Renders per-employee and per-team report pages (event charts, recruitment
//! risk, notes) over a read-only SQLite database.

use axum::Router;
use ee_common::{EntityKind, EntityQueries, RiskModel};
use sqlx::SqlitePool;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod components;
pub mod html;

use components::{Report, ReportContext};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (read-only)
    pub db: SqlitePool,
    /// Recruitment risk classifier; `None` when no model file was found
    pub model: Option<Arc<dyn RiskModel>>,
    /// Page component tree, built once at startup
    pub report: Arc<Report>,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool, model: Option<Arc<dyn RiskModel>>) -> Self {
        Self {
            db,
            model,
            report: Arc::new(Report::new()),
        }
    }

    /// Render context for one entity kind
    pub fn context(&self, kind: EntityKind, entity_id: Option<i64>) -> ReportContext {
        ReportContext {
            entity_id,
            queries: EntityQueries::new(self.db.clone(), kind),
            model: self.model.clone(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/", get(api::index))
        .route("/employee/:id", get(api::employee_report))
        .route("/team/:id", get(api::team_report))
        .route("/update_dropdown", get(api::update_dropdown))
        .route("/update_data", post(api::update_data))
        .route("/static/dashboard.css", get(api::serve_dashboard_css))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
