//! Component layer - composable HTML fragments
//!
//! Each component pulls its own data through the [`ReportContext`] and returns
//! a fragment. [`CombinedComponent`] renders children in order inside a
//! wrapper element.
//!
//! # Structure
//! - **Base** (`base`): header, profile radio, entity dropdown, filter form, notes table
//! - **Charts** (`charts`): cumulative event line chart, recruitment risk bar chart (inline SVG)
//! - **Report** (`report`): visualizations grid and the full report page

use async_trait::async_trait;
use ee_common::{EntityKind, EntityQueries, Result, RiskModel};
use std::sync::Arc;

mod base;
mod charts;
mod report;

pub use base::{DashboardFilters, DataTable, Header, NotesTable, ProfileRadio, ReportDropdown};
pub use charts::{cumulative_counts, BarChart, CumulativePoint, LineChart};
pub use report::{Report, Visualizations};

/// Everything a component needs to fetch its data
#[derive(Clone)]
pub struct ReportContext {
    /// Selected entity; `None` when re-rendering a control without a selection
    pub entity_id: Option<i64>,
    /// Query templates bound to the entity kind being reported on
    pub queries: EntityQueries,
    pub model: Option<Arc<dyn RiskModel>>,
}

impl ReportContext {
    pub fn kind(&self) -> EntityKind {
        self.queries.kind()
    }
}

/// A renderable piece of the report
#[async_trait]
pub trait Component: Send + Sync {
    async fn render(&self, ctx: &ReportContext) -> Result<String>;
}

/// Renders children in order inside a `<div>`
pub struct CombinedComponent {
    class: Option<&'static str>,
    children: Vec<Box<dyn Component>>,
}

impl CombinedComponent {
    pub fn new(children: Vec<Box<dyn Component>>) -> Self {
        Self {
            class: None,
            children,
        }
    }

    /// Set the wrapper's CSS class
    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }
}

#[async_trait]
impl Component for CombinedComponent {
    async fn render(&self, ctx: &ReportContext) -> Result<String> {
        let mut html = match self.class {
            Some(class) => format!("<div class=\"{}\">\n", class),
            None => "<div>\n".to_string(),
        };

        for child in &self.children {
            html.push_str(&child.render(ctx).await?);
            html.push('\n');
        }

        html.push_str("</div>");
        Ok(html)
    }
}
