//! HTTP handlers for ee-dashboard

pub mod error;
pub mod filters;
pub mod health;
pub mod report;
pub mod ui;

pub use error::ReportError;
pub use filters::{update_data, update_dropdown};
pub use health::health_routes;
pub use report::{employee_report, index, team_report};
pub use ui::serve_dashboard_css;
