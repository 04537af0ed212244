//! Handler error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Report and filter endpoint errors
#[derive(Debug)]
pub enum ReportError {
    InvalidInput(String),
    DatabaseError(String),
}

impl From<ee_common::Error> for ReportError {
    fn from(e: ee_common::Error) -> Self {
        match e {
            ee_common::Error::InvalidInput(msg) => ReportError::InvalidInput(msg),
            other => ReportError::DatabaseError(other.to_string()),
        }
    }
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ReportError::InvalidInput(msg) => {
                (StatusCode::BAD_REQUEST, format!("Invalid input: {}", msg))
            }
            ReportError::DatabaseError(msg) => {
                error!("Report rendering failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, format!("Database error: {}", msg))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
