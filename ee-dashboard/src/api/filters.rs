//! Filter form endpoints
//!
//! The profile radio re-fetches the dropdown for the chosen entity kind; the
//! form submission redirects to the matching report page.

use axum::{
    extract::{Query, State},
    response::{Html, Redirect},
    Form,
};
use ee_common::EntityKind;
use serde::Deserialize;
use tracing::debug;

use super::ReportError;
use crate::components::{Component, ReportDropdown};
use crate::AppState;

/// Query parameters sent by the profile radio
#[derive(Debug, Deserialize)]
pub struct DropdownQuery {
    pub profile_type: Option<String>,
}

/// Filter form fields
#[derive(Debug, Deserialize)]
pub struct UpdateForm {
    pub profile_type: String,
    #[serde(rename = "user-selection")]
    pub user_selection: i64,
}

fn parse_kind(value: Option<&str>) -> Result<EntityKind, ReportError> {
    match value {
        Some(v) => Ok(v.parse::<EntityKind>()?),
        None => Err(ReportError::InvalidInput("missing profile_type".to_string())),
    }
}

/// GET /update_dropdown?profile_type=Employee|Team
///
/// Returns the dropdown fragment for the requested kind with nothing selected.
pub async fn update_dropdown(
    State(state): State<AppState>,
    Query(query): Query<DropdownQuery>,
) -> Result<Html<String>, ReportError> {
    let kind = parse_kind(query.profile_type.as_deref())?;
    debug!(%kind, "refreshing dropdown");

    let ctx = state.context(kind, None);
    let fragment = ReportDropdown::default().render(&ctx).await?;
    Ok(Html(fragment))
}

/// POST /update_data
///
/// Redirects (303) to `/employee/{id}` or `/team/{id}`.
pub async fn update_data(Form(form): Form<UpdateForm>) -> Result<Redirect, ReportError> {
    let kind = parse_kind(Some(&form.profile_type))?;
    Ok(Redirect::to(&format!(
        "/{}/{}",
        kind.route_segment(),
        form.user_selection
    )))
}
