//! Report pages
//!
//! One page per entity kind and id; the root page shows employee 1.

use axum::{
    extract::{Path, State},
    response::Html,
};
use ee_common::EntityKind;
use tracing::debug;

use super::ReportError;
use crate::AppState;

/// Entity shown on the landing page
const DEFAULT_EMPLOYEE_ID: i64 = 1;

async fn render_report(
    state: &AppState,
    kind: EntityKind,
    id: i64,
) -> Result<Html<String>, ReportError> {
    debug!(%kind, id, "rendering report");
    let ctx = state.context(kind, Some(id));
    let page = state.report.render_page(&ctx).await?;
    Ok(Html(page))
}

/// GET /
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ReportError> {
    render_report(&state, EntityKind::Employee, DEFAULT_EMPLOYEE_ID).await
}

/// GET /employee/:id
pub async fn employee_report(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, ReportError> {
    render_report(&state, EntityKind::Employee, id).await
}

/// GET /team/:id
pub async fn team_report(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Html<String>, ReportError> {
    render_report(&state, EntityKind::Team, id).await
}
