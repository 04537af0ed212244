//! Static asset serving

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

const DASHBOARD_CSS: &str = include_str!("../ui/dashboard.css");

/// GET /static/dashboard.css
pub async fn serve_dashboard_css() -> Response {
    (
        StatusCode::OK,
        [("content-type", "text/css")],
        DASHBOARD_CSS,
    )
        .into_response()
}
