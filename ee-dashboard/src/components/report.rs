//! Report composition

use async_trait::async_trait;
use ee_common::Result;

use super::base::{DashboardFilters, Header, NotesTable};
use super::charts::{BarChart, LineChart};
use super::{CombinedComponent, Component, ReportContext};
use crate::html;

const PAGE_TITLE: &str = "Employee Events Dashboard";

/// Line and bar charts side by side
pub struct Visualizations(CombinedComponent);

impl Visualizations {
    pub fn new() -> Self {
        Self(
            CombinedComponent::new(vec![
                Box::new(LineChart::default()),
                Box::new(BarChart::default()),
            ])
            .with_class("grid"),
        )
    }
}

impl Default for Visualizations {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Component for Visualizations {
    async fn render(&self, ctx: &ReportContext) -> Result<String> {
        self.0.render(ctx).await
    }
}

/// Full report: header, filters, charts and notes
pub struct Report(CombinedComponent);

impl Report {
    pub fn new() -> Self {
        Self(CombinedComponent::new(vec![
            Box::new(Header),
            Box::new(DashboardFilters::new()),
            Box::new(Visualizations::new()),
            Box::new(NotesTable),
        ]))
    }

    /// Render the report wrapped in a complete HTML document
    pub async fn render_page(&self, ctx: &ReportContext) -> Result<String> {
        let body = self.render(ctx).await?;
        Ok(html::page(PAGE_TITLE, &body))
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Component for Report {
    async fn render(&self, ctx: &ReportContext) -> Result<String> {
        self.0.render(ctx).await
    }
}
